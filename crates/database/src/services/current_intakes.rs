use crate::entities::{intake, program};
use crate::services::query_delivery::{
    DeliveryQueryService, DeliveryWithRelations, SectionWithRelations,
};
use chrono::NaiveDate;
use models::{Campus, Semester};
use sea_orm::{DatabaseConnection, DbErr};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProgramSummary {
    pub id: Uuid,
    pub name: String,
    pub code: Option<String>,
}

impl From<&program::Model> for ProgramSummary {
    fn from(program: &program::Model) -> Self {
        Self {
            id: program.id,
            name: program.name.clone(),
            code: program.code.clone(),
        }
    }
}

/// One section of a program with unassigned deliveries
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SectionGap {
    pub section_name: String,
    pub course_year: i16,
    pub campus: Campus,
    pub missing_count: u32,
}

/// A program with at least one unassigned delivery in the intake
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProgramGaps {
    pub program: ProgramSummary,
    pub total_missing: u32,
    pub sections: Vec<SectionGap>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IntakeGaps {
    pub id: Uuid,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub semester: Semester,
    pub semester_display: String,
    /// Distinct unassigned deliveries touching the intake, programless
    /// sections included
    pub missing_professors: u32,
    pub missing_programs: Vec<ProgramGaps>,
    pub complete_programs: Vec<ProgramSummary>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CurrentIntakesReport {
    pub selected_date: NaiveDate,
    pub intakes: Vec<IntakeGaps>,
}

struct GapAccum {
    program: ProgramSummary,
    total_missing: u32,
    sections: BTreeMap<(String, i16, Campus), u32>,
}

pub struct CurrentIntakeService;

impl CurrentIntakeService {
    /// Current-intakes report for `selected_date`: which intakes are
    /// running, and which of their programs still have unstaffed deliveries
    pub async fn current_intakes(
        db: &DatabaseConnection,
        selected_date: NaiveDate,
    ) -> Result<CurrentIntakesReport, DbErr> {
        let intakes = DeliveryQueryService::intakes_overlapping(db, selected_date).await?;
        let intake_ids: Vec<Uuid> = intakes.iter().map(|i| i.id).collect();

        let gaps = DeliveryQueryService::deliveries_missing_professor(db, &intake_ids).await?;
        let sections = DeliveryQueryService::sections_with_relations(db, &intake_ids).await?;

        Ok(Self::build_report(selected_date, intakes, &gaps, &sections))
    }

    /// Groups unassigned deliveries by intake and program, then partitions
    /// every program with a section in the intake into missing or complete.
    /// One count per (delivery, section) encounter; sections without a
    /// program are invisible to the per-program grouping.
    pub fn build_report(
        selected_date: NaiveDate,
        intakes: Vec<intake::Model>,
        gaps: &[DeliveryWithRelations],
        sections: &[SectionWithRelations],
    ) -> CurrentIntakesReport {
        let mut grouped: HashMap<Uuid, HashMap<Uuid, GapAccum>> = HashMap::new();
        let mut unassigned_by_intake: HashMap<Uuid, HashSet<Uuid>> = HashMap::new();

        for bundle in gaps {
            for section in &bundle.sections {
                // a delivery may also span sections of intakes outside the window
                if !section.intake.contains(selected_date) {
                    continue;
                }

                unassigned_by_intake
                    .entry(section.intake.id)
                    .or_default()
                    .insert(bundle.delivery.id);

                let Some(program) = &section.program else {
                    continue;
                };
                let group = grouped
                    .entry(section.intake.id)
                    .or_default()
                    .entry(program.id)
                    .or_insert_with(|| GapAccum {
                        program: ProgramSummary::from(program),
                        total_missing: 0,
                        sections: BTreeMap::new(),
                    });
                group.total_missing += 1;
                *group
                    .sections
                    .entry((
                        section.section.name.clone(),
                        section.section.course_year,
                        section.section.campus,
                    ))
                    .or_insert(0) += 1;
            }
        }

        // universe of programs per intake, so fully staffed programs are
        // reported as complete instead of dropped
        let mut programs_by_intake: HashMap<Uuid, HashMap<Uuid, ProgramSummary>> = HashMap::new();
        for section in sections {
            if let Some(program) = &section.program {
                programs_by_intake
                    .entry(section.intake.id)
                    .or_default()
                    .entry(program.id)
                    .or_insert_with(|| ProgramSummary::from(program));
            }
        }

        let report_intakes = intakes
            .into_iter()
            .map(|intake| {
                let mut gap_groups = grouped.remove(&intake.id).unwrap_or_default();
                let mut universe: Vec<ProgramSummary> = programs_by_intake
                    .remove(&intake.id)
                    .map(|programs| programs.into_values().collect())
                    .unwrap_or_default();
                universe.sort_by(|a, b| a.code.cmp(&b.code).then_with(|| a.name.cmp(&b.name)));

                let mut missing_programs = Vec::new();
                let mut complete_programs = Vec::new();
                for program in universe {
                    match gap_groups.remove(&program.id) {
                        Some(group) => missing_programs.push(ProgramGaps {
                            program: group.program,
                            total_missing: group.total_missing,
                            sections: group
                                .sections
                                .into_iter()
                                .map(|((section_name, course_year, campus), missing_count)| {
                                    SectionGap {
                                        section_name,
                                        course_year,
                                        campus,
                                        missing_count,
                                    }
                                })
                                .collect(),
                        }),
                        None => complete_programs.push(program),
                    }
                }

                IntakeGaps {
                    missing_professors: unassigned_by_intake
                        .get(&intake.id)
                        .map(|deliveries| deliveries.len() as u32)
                        .unwrap_or(0),
                    semester_display: intake.semester.label().to_string(),
                    id: intake.id,
                    name: intake.name,
                    start_date: intake.start_date,
                    end_date: intake.end_date,
                    semester: intake.semester,
                    missing_programs,
                    complete_programs,
                }
            })
            .collect();

        CurrentIntakesReport {
            selected_date,
            intakes: report_intakes,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::entities::{course_delivery, program, section};
    use chrono::NaiveDateTime;
    use models::{ProgramType, School};

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn fall_intake(id: u128) -> intake::Model {
        intake::Model {
            id: Uuid::from_u128(id),
            name: "Fall 2025".to_string(),
            start_date: date(2025, 9, 1),
            end_date: date(2025, 12, 15),
            semester: Semester::Fall,
            active: true,
            created_at: timestamp(),
            updated_at: timestamp(),
        }
    }

    fn cs_program(id: u128) -> program::Model {
        program::Model {
            id: Uuid::from_u128(id),
            name: "Computer Science Program".to_string(),
            school: School::ScienceAndTechnology,
            code: Some("CS".to_string()),
            program_type: ProgramType::Bachelors,
            years: 4,
            created_at: timestamp(),
            updated_at: timestamp(),
        }
    }

    fn section_in(
        id: u128,
        name: &str,
        intake: &intake::Model,
        program: Option<&program::Model>,
    ) -> SectionWithRelations {
        SectionWithRelations {
            section: section::Model {
                id: Uuid::from_u128(id),
                name: name.to_string(),
                intake_id: intake.id,
                campus: Campus::Segovia,
                course_year: 1,
                program_id: program.map(|p| p.id),
                joined_academic_year_id: None,
                created_at: timestamp(),
                updated_at: timestamp(),
            },
            intake: intake.clone(),
            program: program.cloned(),
        }
    }

    fn unassigned_delivery(id: u128, sections: Vec<SectionWithRelations>) -> DeliveryWithRelations {
        DeliveryWithRelations {
            delivery: course_delivery::Model {
                id: Uuid::from_u128(id),
                course_id: None,
                professor_id: None,
                created_at: timestamp(),
                updated_at: timestamp(),
            },
            course: None,
            course_area: None,
            professor: None,
            sections,
        }
    }

    #[test]
    fn test_single_gap_is_grouped_under_its_program() {
        let intake = fall_intake(1);
        let program = cs_program(2);
        let section = section_in(3, "A", &intake, Some(&program));

        let gaps = vec![unassigned_delivery(10, vec![section.clone()])];
        let report = CurrentIntakeService::build_report(
            date(2025, 10, 1),
            vec![intake.clone()],
            &gaps,
            &[section],
        );

        assert_eq!(report.selected_date, date(2025, 10, 1));
        assert_eq!(report.intakes.len(), 1);
        let intake_gaps = &report.intakes[0];
        assert_eq!(intake_gaps.missing_professors, 1);
        assert_eq!(intake_gaps.missing_programs.len(), 1);
        assert!(intake_gaps.complete_programs.is_empty());

        let program_gaps = &intake_gaps.missing_programs[0];
        assert_eq!(program_gaps.program.code.as_deref(), Some("CS"));
        assert_eq!(program_gaps.total_missing, 1);
        assert_eq!(
            program_gaps.sections,
            vec![SectionGap {
                section_name: "A".to_string(),
                course_year: 1,
                campus: Campus::Segovia,
                missing_count: 1,
            }]
        );
    }

    #[test]
    fn test_every_program_is_missing_or_complete_never_both() {
        let intake = fall_intake(1);
        let staffed = cs_program(2);
        let mut unstaffed = cs_program(3);
        unstaffed.name = "Law Program".to_string();
        unstaffed.code = Some("LAW".to_string());

        let staffed_section = section_in(4, "A", &intake, Some(&staffed));
        let unstaffed_section = section_in(5, "B", &intake, Some(&unstaffed));

        let gaps = vec![unassigned_delivery(10, vec![unstaffed_section.clone()])];
        let report = CurrentIntakeService::build_report(
            date(2025, 10, 1),
            vec![intake.clone()],
            &gaps,
            &[staffed_section, unstaffed_section],
        );

        let intake_gaps = &report.intakes[0];
        let missing: Vec<_> = intake_gaps
            .missing_programs
            .iter()
            .map(|g| g.program.id)
            .collect();
        let complete: Vec<_> = intake_gaps.complete_programs.iter().map(|p| p.id).collect();

        assert_eq!(missing, vec![unstaffed.id]);
        assert_eq!(complete, vec![staffed.id]);
        assert!(!missing.iter().any(|id| complete.contains(id)));
    }

    #[test]
    fn test_totals_are_additive_over_sections() {
        let intake = fall_intake(1);
        let program = cs_program(2);
        let section_a = section_in(3, "A", &intake, Some(&program));
        let section_b = section_in(4, "B", &intake, Some(&program));

        // one delivery spanning two sections gaps each of them
        let gaps = vec![
            unassigned_delivery(10, vec![section_a.clone(), section_b.clone()]),
            unassigned_delivery(11, vec![section_a.clone()]),
        ];
        let report = CurrentIntakeService::build_report(
            date(2025, 10, 1),
            vec![intake.clone()],
            &gaps,
            &[section_a, section_b],
        );

        let intake_gaps = &report.intakes[0];
        let program_gaps = &intake_gaps.missing_programs[0];
        let summed: u32 = program_gaps.sections.iter().map(|s| s.missing_count).sum();
        assert_eq!(program_gaps.total_missing, 3);
        assert_eq!(summed, 3);
        assert_eq!(program_gaps.sections.len(), 2);
        // the spanning delivery is still one distinct unassigned delivery
        assert_eq!(intake_gaps.missing_professors, 2);
    }

    #[test]
    fn test_programless_sections_count_toward_missing_professors_only() {
        let intake = fall_intake(1);
        let section = section_in(3, "A", &intake, None);

        let gaps = vec![unassigned_delivery(10, vec![section.clone()])];
        let report = CurrentIntakeService::build_report(
            date(2025, 10, 1),
            vec![intake.clone()],
            &gaps,
            &[section],
        );

        let intake_gaps = &report.intakes[0];
        assert_eq!(intake_gaps.missing_professors, 1);
        assert!(intake_gaps.missing_programs.is_empty());
        assert!(intake_gaps.complete_programs.is_empty());
    }

    #[test]
    fn test_sections_outside_the_window_are_ignored() {
        let current = fall_intake(1);
        let mut ended = fall_intake(2);
        ended.name = "Fall 2024".to_string();
        ended.start_date = date(2024, 9, 1);
        ended.end_date = date(2024, 12, 15);

        let program = cs_program(3);
        let current_section = section_in(4, "A", &current, Some(&program));
        let ended_section = section_in(5, "A", &ended, Some(&program));

        // the delivery also spans a section of the finished intake
        let gaps = vec![unassigned_delivery(
            10,
            vec![current_section.clone(), ended_section],
        )];
        let report = CurrentIntakeService::build_report(
            date(2025, 10, 1),
            vec![current.clone()],
            &gaps,
            &[current_section],
        );

        assert_eq!(report.intakes.len(), 1);
        let program_gaps = &report.intakes[0].missing_programs[0];
        assert_eq!(program_gaps.total_missing, 1);
    }

    #[test]
    fn test_no_active_intakes_is_an_empty_report() {
        let report =
            CurrentIntakeService::build_report(date(2025, 10, 1), vec![], &[], &[]);
        assert!(report.intakes.is_empty());
    }

    #[test]
    fn test_report_is_deterministic() {
        let intake = fall_intake(1);
        let program_a = cs_program(2);
        let mut program_b = cs_program(3);
        program_b.code = Some("LAW".to_string());

        let section_a = section_in(4, "A", &intake, Some(&program_a));
        let section_b = section_in(5, "B", &intake, Some(&program_b));
        let gaps = vec![
            unassigned_delivery(10, vec![section_a.clone()]),
            unassigned_delivery(11, vec![section_b.clone()]),
        ];
        let sections = [section_a, section_b];

        let first = CurrentIntakeService::build_report(
            date(2025, 10, 1),
            vec![intake.clone()],
            &gaps,
            &sections,
        );
        let second = CurrentIntakeService::build_report(
            date(2025, 10, 1),
            vec![intake],
            &gaps,
            &sections,
        );
        assert_eq!(first, second);
    }
}
