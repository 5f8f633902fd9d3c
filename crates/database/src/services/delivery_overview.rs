use crate::entities::{area, course, intake, program};
use crate::services::current_intakes::ProgramSummary;
use crate::services::query_delivery::{
    DeliveryFilter, DeliveryQueryService, DeliveryWithRelations, SectionWithRelations,
};
use chrono::NaiveDate;
use models::{Campus, CourseType, Semester, TimeSlot};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use serde::Serialize;
use std::collections::BTreeMap;
use uuid::Uuid;

/// One professor placed in a campus/time-slot cell
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProfessorAssignment {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub r#type: String,
    pub section_name: String,
    pub delivery_id: Uuid,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SlotAssignments {
    pub morning: Vec<ProfessorAssignment>,
    pub afternoon: Vec<ProfessorAssignment>,
}

/// Fixed campus-by-time-slot grid; every cell exists even when empty
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CampusGrid {
    #[serde(rename = "Segovia")]
    pub segovia: SlotAssignments,
    #[serde(rename = "Madrid A")]
    pub madrid_a: SlotAssignments,
    #[serde(rename = "Madrid B")]
    pub madrid_b: SlotAssignments,
}

impl CampusGrid {
    pub fn slot_mut(&mut self, campus: Campus, slot: TimeSlot) -> &mut Vec<ProfessorAssignment> {
        let cell = match campus {
            Campus::Segovia => &mut self.segovia,
            Campus::MadridA => &mut self.madrid_a,
            Campus::MadridB => &mut self.madrid_b,
        };
        match slot {
            TimeSlot::Morning => &mut cell.morning,
            TimeSlot::Afternoon => &mut cell.afternoon,
        }
    }

    pub fn slot(&self, campus: Campus, slot: TimeSlot) -> &[ProfessorAssignment] {
        let cell = match campus {
            Campus::Segovia => &self.segovia,
            Campus::MadridA => &self.madrid_a,
            Campus::MadridB => &self.madrid_b,
        };
        match slot {
            TimeSlot::Morning => &cell.morning,
            TimeSlot::Afternoon => &cell.afternoon,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AreaSummary {
    pub id: Uuid,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CourseSummary {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub r#type: Option<CourseType>,
    pub type_display: String,
    pub credits: f64,
    pub sessions: i32,
    pub area: Option<AreaSummary>,
}

impl CourseSummary {
    fn new(course: &course::Model, area: Option<&area::Model>) -> Self {
        Self {
            id: course.id,
            code: course.code.clone(),
            name: course.name.clone(),
            r#type: course.course_type,
            type_display: course
                .course_type
                .map(|t| t.label().to_string())
                .unwrap_or_default(),
            credits: course.credits,
            sessions: course.sessions,
            area: area.map(|a| AreaSummary {
                id: a.id,
                name: a.name.clone(),
            }),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IntakeRef {
    pub id: Uuid,
    pub name: String,
    pub semester_display: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProgramRef {
    pub id: Option<Uuid>,
    pub name: Option<String>,
    pub code: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SectionDescriptor {
    pub name: String,
    pub campus: Campus,
    pub campus_display: String,
    pub intake: IntakeRef,
    pub program: ProgramRef,
}

impl SectionDescriptor {
    fn new(section: &SectionWithRelations) -> Self {
        Self {
            name: section.section.name.clone(),
            campus: section.section.campus,
            campus_display: section.section.campus.label().to_string(),
            intake: IntakeRef {
                id: section.intake.id,
                name: section.intake.name.clone(),
                semester_display: section.intake.semester.label().to_string(),
            },
            program: ProgramRef {
                id: section.program.as_ref().map(|p| p.id),
                name: section.program.as_ref().map(|p| p.name.clone()),
                code: section.program.as_ref().and_then(|p| p.code.clone()),
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CourseAssignments {
    pub course: CourseSummary,
    pub assignments: CampusGrid,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SectionGroup {
    pub section_info: SectionDescriptor,
    pub courses: Vec<CourseAssignments>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct YearGroup {
    pub year: i16,
    pub sections: Vec<SectionGroup>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FilterOption {
    pub value: String,
    pub display: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IntakeOption {
    pub id: Uuid,
    pub name: String,
    pub semester: Semester,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Everything the overview UI offers for narrowing the matrix
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FilterCatalog {
    pub programs: Vec<ProgramSummary>,
    pub intakes: Vec<IntakeOption>,
    pub semesters: Vec<FilterOption>,
    pub campuses: Vec<FilterOption>,
    pub time_slots: Vec<FilterOption>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DeliveryOverview {
    pub years: BTreeMap<i16, YearGroup>,
    pub filters: FilterCatalog,
}

struct SectionAccum {
    section_info: SectionDescriptor,
    courses: BTreeMap<String, CourseAssignments>,
}

pub struct DeliveryOverviewService;

impl DeliveryOverviewService {
    /// Campus and time-slot delivery matrix for the deliveries matching the
    /// filter, plus the filter catalogs for the overview page
    pub async fn delivery_overview(
        db: &DatabaseConnection,
        filter: &DeliveryFilter,
    ) -> Result<DeliveryOverview, DbErr> {
        let deliveries = DeliveryQueryService::deliveries_with_relations(db, filter).await?;
        let years = Self::build_matrix(&deliveries);

        let programs = program::Entity::find()
            .order_by_asc(program::Column::Code)
            .all(db)
            .await?;
        let intakes = intake::Entity::find()
            .order_by_desc(intake::Column::StartDate)
            .all(db)
            .await?;

        Ok(DeliveryOverview {
            years,
            filters: Self::filter_catalog(&programs, &intakes),
        })
    }

    /// Groups deliveries into per-year, per-section course cells, appending one
    /// professor descriptor per (delivery, section) pair. Deliveries with no
    /// course cannot be placed and are skipped.
    pub fn build_matrix(deliveries: &[DeliveryWithRelations]) -> BTreeMap<i16, YearGroup> {
        let mut by_year: BTreeMap<i16, BTreeMap<(String, Campus, Uuid), SectionAccum>> =
            BTreeMap::new();

        for bundle in deliveries {
            let Some(course) = &bundle.course else {
                continue;
            };

            for section in &bundle.sections {
                let key = (
                    section.section.name.clone(),
                    section.section.campus,
                    section.intake.id,
                );
                let group = by_year
                    .entry(section.section.course_year)
                    .or_default()
                    .entry(key)
                    .or_insert_with(|| SectionAccum {
                        section_info: SectionDescriptor::new(section),
                        courses: BTreeMap::new(),
                    });

                let cell = group
                    .courses
                    .entry(course.code.clone())
                    .or_insert_with(|| CourseAssignments {
                        course: CourseSummary::new(course, bundle.course_area.as_ref()),
                        assignments: CampusGrid::default(),
                    });

                if let Some(professor) = &bundle.professor {
                    let slot = TimeSlot::for_availabilities(&professor.availabilities);
                    cell.assignments
                        .slot_mut(section.section.campus, slot)
                        .push(ProfessorAssignment {
                            id: professor.id,
                            name: professor.display_name(),
                            email: professor.contact_email().to_string(),
                            r#type: professor.professor_type.label().to_string(),
                            section_name: section.section.name.clone(),
                            delivery_id: bundle.delivery.id,
                        });
                }
            }
        }

        by_year
            .into_iter()
            .map(|(year, groups)| {
                (
                    year,
                    YearGroup {
                        year,
                        sections: groups
                            .into_values()
                            .map(|group| SectionGroup {
                                section_info: group.section_info,
                                courses: group.courses.into_values().collect(),
                            })
                            .collect(),
                    },
                )
            })
            .collect()
    }

    fn filter_catalog(programs: &[program::Model], intakes: &[intake::Model]) -> FilterCatalog {
        FilterCatalog {
            programs: programs.iter().map(ProgramSummary::from).collect(),
            intakes: intakes
                .iter()
                .map(|i| IntakeOption {
                    id: i.id,
                    name: i.name.clone(),
                    semester: i.semester,
                    start_date: i.start_date,
                    end_date: i.end_date,
                })
                .collect(),
            semesters: Semester::ALL
                .iter()
                .map(|s| FilterOption {
                    value: s.as_str().to_string(),
                    display: s.label().to_string(),
                })
                .collect(),
            campuses: Campus::ALL
                .iter()
                .map(|c| FilterOption {
                    value: c.as_str().to_string(),
                    display: c.label().to_string(),
                })
                .collect(),
            time_slots: TimeSlot::ALL
                .iter()
                .map(|t| FilterOption {
                    value: t.as_str().to_string(),
                    display: t.label().to_string(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::entities::{course_delivery, professor, section};
    use chrono::NaiveDateTime;
    use models::ProfessorType;

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn fall_intake(id: u128) -> intake::Model {
        intake::Model {
            id: Uuid::from_u128(id),
            name: "Fall 2025".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 12, 15).unwrap(),
            semester: Semester::Fall,
            active: true,
            created_at: timestamp(),
            updated_at: timestamp(),
        }
    }

    fn section_in(
        id: u128,
        name: &str,
        campus: Campus,
        course_year: i16,
        intake: &intake::Model,
    ) -> SectionWithRelations {
        SectionWithRelations {
            section: section::Model {
                id: Uuid::from_u128(id),
                name: name.to_string(),
                intake_id: intake.id,
                campus,
                course_year,
                program_id: None,
                joined_academic_year_id: None,
                created_at: timestamp(),
                updated_at: timestamp(),
            },
            intake: intake.clone(),
            program: None,
        }
    }

    fn course_model(id: u128, code: &str) -> course::Model {
        course::Model {
            id: Uuid::from_u128(id),
            code: code.to_string(),
            name: format!("Course {code}"),
            course_type: Some(CourseType::Basic),
            credits: 3.0,
            sessions: 12,
            area_id: None,
        }
    }

    fn professor_model(id: u128, availabilities: &[&str]) -> professor::Model {
        professor::Model {
            id: Uuid::from_u128(id),
            name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            corporate_email: Some("john.doe@university.edu".to_string()),
            phone_number: None,
            campuses: vec![Campus::Segovia.as_str().to_string()],
            availabilities: availabilities.iter().map(|a| a.to_string()).collect(),
            professor_type: ProfessorType::Faculty,
            minimum_sessions: 0,
            birth_year: None,
            joined_year: None,
            linkedin_profile: None,
            accredited: None,
            created_at: timestamp(),
            updated_at: timestamp(),
        }
    }

    fn delivery(
        id: u128,
        course: Option<course::Model>,
        professor: Option<professor::Model>,
        sections: Vec<SectionWithRelations>,
    ) -> DeliveryWithRelations {
        DeliveryWithRelations {
            delivery: course_delivery::Model {
                id: Uuid::from_u128(id),
                course_id: course.as_ref().map(|c| c.id),
                professor_id: professor.as_ref().map(|p| p.id),
                created_at: timestamp(),
                updated_at: timestamp(),
            },
            course,
            course_area: None,
            professor,
            sections,
        }
    }

    fn total_assignments(years: &BTreeMap<i16, YearGroup>) -> usize {
        years
            .values()
            .flat_map(|y| &y.sections)
            .flat_map(|s| &s.courses)
            .map(|c| {
                Campus::ALL
                    .iter()
                    .flat_map(|campus| {
                        TimeSlot::ALL
                            .iter()
                            .map(|slot| c.assignments.slot(*campus, *slot).len())
                    })
                    .sum::<usize>()
            })
            .sum()
    }

    #[test]
    fn test_morning_professor_lands_in_the_morning_cell() {
        let intake = fall_intake(1);
        let section = section_in(2, "A", Campus::Segovia, 1, &intake);
        let deliveries = vec![delivery(
            10,
            Some(course_model(3, "CS101")),
            Some(professor_model(4, &["morning"])),
            vec![section],
        )];

        let years = DeliveryOverviewService::build_matrix(&deliveries);
        assert_eq!(years.len(), 1);

        let year = &years[&1];
        assert_eq!(year.sections.len(), 1);
        let cell = &year.sections[0].courses[0];
        assert_eq!(cell.course.code, "CS101");

        let morning = cell.assignments.slot(Campus::Segovia, TimeSlot::Morning);
        assert_eq!(morning.len(), 1);
        assert_eq!(morning[0].name, "John Doe");
        assert_eq!(morning[0].email, "john.doe@university.edu");
        assert!(cell
            .assignments
            .slot(Campus::Segovia, TimeSlot::Afternoon)
            .is_empty());
    }

    #[test]
    fn test_afternoon_availability_moves_the_slot() {
        let intake = fall_intake(1);
        let section = section_in(2, "A", Campus::MadridA, 1, &intake);
        let deliveries = vec![delivery(
            10,
            Some(course_model(3, "CS101")),
            Some(professor_model(4, &["morning", "afternoon"])),
            vec![section],
        )];

        let years = DeliveryOverviewService::build_matrix(&deliveries);
        let cell = &years[&1].sections[0].courses[0];
        assert!(cell
            .assignments
            .slot(Campus::MadridA, TimeSlot::Morning)
            .is_empty());
        assert_eq!(
            cell.assignments
                .slot(Campus::MadridA, TimeSlot::Afternoon)
                .len(),
            1
        );
    }

    #[test]
    fn test_deliveries_without_a_course_are_skipped() {
        let intake = fall_intake(1);
        let section = section_in(2, "A", Campus::Segovia, 1, &intake);
        let deliveries = vec![delivery(
            10,
            None,
            Some(professor_model(4, &["morning"])),
            vec![section],
        )];

        let years = DeliveryOverviewService::build_matrix(&deliveries);
        assert!(years.is_empty());
    }

    #[test]
    fn test_one_descriptor_per_delivery_section_pair() {
        let intake = fall_intake(1);
        let section_a = section_in(2, "A", Campus::Segovia, 1, &intake);
        let section_b = section_in(3, "B", Campus::Segovia, 1, &intake);
        let course = course_model(4, "CS101");
        let professor = professor_model(5, &["morning"]);

        // one delivery over two sections and one unassigned delivery
        let deliveries = vec![
            delivery(
                10,
                Some(course.clone()),
                Some(professor.clone()),
                vec![section_a.clone(), section_b.clone()],
            ),
            delivery(11, Some(course), None, vec![section_a]),
        ];

        let years = DeliveryOverviewService::build_matrix(&deliveries);
        assert_eq!(total_assignments(&years), 2);
    }

    #[test]
    fn test_years_are_sorted_ascending() {
        let intake = fall_intake(1);
        let deliveries = vec![
            delivery(
                10,
                Some(course_model(3, "CS201")),
                None,
                vec![section_in(2, "A", Campus::Segovia, 2, &intake)],
            ),
            delivery(
                11,
                Some(course_model(4, "CS101")),
                None,
                vec![section_in(5, "A", Campus::Segovia, 1, &intake)],
            ),
        ];

        let years = DeliveryOverviewService::build_matrix(&deliveries);
        let order: Vec<i16> = years.keys().copied().collect();
        assert_eq!(order, vec![1, 2]);
    }

    #[test]
    fn test_course_metadata_is_initialized_once_per_section_group() {
        let intake = fall_intake(1);
        let section = section_in(2, "A", Campus::Segovia, 1, &intake);
        let course = course_model(3, "CS101");

        let deliveries = vec![
            delivery(
                10,
                Some(course.clone()),
                Some(professor_model(4, &["morning"])),
                vec![section.clone()],
            ),
            delivery(
                11,
                Some(course),
                Some(professor_model(5, &["afternoon"])),
                vec![section],
            ),
        ];

        let years = DeliveryOverviewService::build_matrix(&deliveries);
        let section_group = &years[&1].sections[0];
        assert_eq!(section_group.courses.len(), 1);
        assert_eq!(total_assignments(&years), 2);
    }
}
