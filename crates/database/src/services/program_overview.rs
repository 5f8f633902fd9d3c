use crate::entities::{intake, program, section};
use crate::services::query_delivery::{
    DeliveryQueryService, DeliveryWithRelations, SectionWithRelations,
};
use chrono::NaiveDate;
use models::{Campus, School, Semester};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use serde::Serialize;
use serde_json::{Value, json};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use uuid::Uuid;

const BASE_HEADERS: [&str; 4] = ["Code", "Course", "Type", "Credits"];
const MISSING_MARKER: &str = "Missing";
const EMPTY_CELL: &str = "—";
const UNKNOWN_COURSE_KEY: &str = "UNKNOWN";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProgramDetail {
    pub id: Uuid,
    pub name: String,
    pub code: Option<String>,
    pub school: School,
    pub school_display: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IntakeDetail {
    pub id: Uuid,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub semester: Semester,
    pub semester_display: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DeliveryCourseRef {
    pub id: Option<Uuid>,
    pub name: Option<String>,
    pub code: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DeliveryProfessorRef {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DeliveryCell {
    pub id: Uuid,
    pub course: DeliveryCourseRef,
    pub professor: Option<DeliveryProfessorRef>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SectionDeliveries {
    pub id: Uuid,
    pub name: String,
    pub campus: Campus,
    pub campus_display: String,
    pub course_year: i16,
    pub course_deliveries: Vec<DeliveryCell>,
}

/// Projection of one program within one intake
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProgramIntakeOverview {
    pub program: ProgramDetail,
    pub intake: IntakeDetail,
    pub sections: Vec<SectionDeliveries>,
}

/// One per-year, per-intake table of the program delivery overview
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OverviewTable {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

struct TableRow {
    name: String,
    course_type: String,
    credits: f64,
    cells: HashMap<String, String>,
}

pub struct ProgramOverviewService;

impl ProgramOverviewService {
    /// Sections of one program in one intake with their deliveries.
    /// Returns `None` when either id does not resolve.
    pub async fn program_intake_overview(
        db: &DatabaseConnection,
        program_id: Uuid,
        intake_id: Uuid,
    ) -> Result<Option<ProgramIntakeOverview>, DbErr> {
        let Some(program) = program::Entity::find_by_id(program_id).one(db).await? else {
            return Ok(None);
        };
        let Some(intake) = intake::Entity::find_by_id(intake_id).one(db).await? else {
            return Ok(None);
        };

        let sections = section::Entity::find()
            .filter(section::Column::ProgramId.eq(program_id))
            .filter(section::Column::IntakeId.eq(intake_id))
            .order_by_asc(section::Column::CourseYear)
            .order_by_asc(section::Column::Name)
            .all(db)
            .await?;

        let section_ids: Vec<Uuid> = sections.iter().map(|s| s.id).collect();
        let bundles = DeliveryQueryService::deliveries_for_sections(db, &section_ids).await?;

        // deliveries per section, ordered by course code for stable output
        let mut cells_by_section: HashMap<Uuid, Vec<DeliveryCell>> = HashMap::new();
        for bundle in &bundles {
            for section in &bundle.sections {
                if !section_ids.contains(&section.section.id) {
                    continue;
                }
                cells_by_section
                    .entry(section.section.id)
                    .or_default()
                    .push(Self::delivery_cell(bundle));
            }
        }
        for cells in cells_by_section.values_mut() {
            cells.sort_by(|a, b| a.course.code.cmp(&b.course.code).then(a.id.cmp(&b.id)));
        }

        Ok(Some(ProgramIntakeOverview {
            program: ProgramDetail {
                id: program.id,
                name: program.name,
                code: program.code,
                school: program.school,
                school_display: program.school.label().to_string(),
            },
            intake: IntakeDetail {
                id: intake.id,
                name: intake.name,
                start_date: intake.start_date,
                end_date: intake.end_date,
                semester: intake.semester,
                semester_display: intake.semester.label().to_string(),
            },
            sections: sections
                .into_iter()
                .map(|s| SectionDeliveries {
                    id: s.id,
                    campus_display: s.campus.label().to_string(),
                    course_deliveries: cells_by_section.remove(&s.id).unwrap_or_default(),
                    name: s.name,
                    campus: s.campus,
                    course_year: s.course_year,
                })
                .collect(),
        }))
    }

    fn delivery_cell(bundle: &DeliveryWithRelations) -> DeliveryCell {
        DeliveryCell {
            id: bundle.delivery.id,
            course: DeliveryCourseRef {
                id: bundle.course.as_ref().map(|c| c.id),
                name: bundle.course.as_ref().map(|c| c.name.clone()),
                code: bundle.course.as_ref().map(|c| c.code.clone()),
            },
            professor: bundle.professor.as_ref().map(|p| DeliveryProfessorRef {
                id: p.id,
                name: p.display_name(),
                email: p.corporate_email.clone(),
            }),
        }
    }

    /// Per year+intake tables of one program across its manually active
    /// intakes. Returns `None` when the program does not resolve; a known
    /// program with no data yields an empty list.
    pub async fn program_overview_tables(
        db: &DatabaseConnection,
        program_id: Uuid,
    ) -> Result<Option<Vec<OverviewTable>>, DbErr> {
        if program::Entity::find_by_id(program_id).one(db).await?.is_none() {
            return Ok(None);
        }

        let sections = DeliveryQueryService::sections_of_program(db, program_id, true).await?;
        let section_ids: Vec<Uuid> = sections.iter().map(|s| s.section.id).collect();
        let bundles = DeliveryQueryService::deliveries_for_sections(db, &section_ids).await?;

        Ok(Some(Self::build_tables(program_id, &sections, &bundles)))
    }

    /// Builds the tables: columns are discovered globally across all active
    /// sections of the program so every table has the same column set; a
    /// later delivery for the same (intake, year, course, column) overwrites
    /// an earlier one.
    pub fn build_tables(
        program_id: Uuid,
        sections: &[SectionWithRelations],
        deliveries: &[DeliveryWithRelations],
    ) -> Vec<OverviewTable> {
        let column_key =
            |s: &SectionWithRelations| format!("{} {}", s.section.campus.label(), s.section.name);

        let column_set: BTreeSet<String> = sections.iter().map(&column_key).collect();
        let columns: Vec<String> = column_set.into_iter().collect();
        let headers: Vec<String> = BASE_HEADERS
            .iter()
            .map(|h| h.to_string())
            .chain(columns.iter().cloned())
            .collect();

        let intakes_by_id: HashMap<Uuid, &intake::Model> =
            sections.iter().map(|s| (s.intake.id, &s.intake)).collect();

        // intake -> year -> course code -> row
        let mut aggregated: HashMap<Uuid, BTreeMap<i16, BTreeMap<String, TableRow>>> =
            HashMap::new();

        for bundle in deliveries {
            let (course_key, course_name, course_type, credits) = match &bundle.course {
                Some(course) => (
                    course.code.clone(),
                    course.name.clone(),
                    course
                        .course_type
                        .map(|t| t.as_str().to_string())
                        .unwrap_or_default(),
                    course.credits,
                ),
                None => (
                    UNKNOWN_COURSE_KEY.to_string(),
                    "Unknown Course".to_string(),
                    String::new(),
                    0.0,
                ),
            };

            for section in &bundle.sections {
                // only this program's sections in active intakes feed the tables
                if section.section.program_id != Some(program_id) || !section.intake.active {
                    continue;
                }

                let row = aggregated
                    .entry(section.intake.id)
                    .or_default()
                    .entry(section.section.course_year)
                    .or_default()
                    .entry(course_key.clone())
                    .or_insert_with(|| TableRow {
                        name: course_name.clone(),
                        course_type: course_type.clone(),
                        credits,
                        cells: HashMap::new(),
                    });

                let display = match &bundle.professor {
                    Some(professor) => professor.display_name(),
                    None => MISSING_MARKER.to_string(),
                };
                row.cells.insert(column_key(section), display);
            }
        }

        let years: BTreeSet<i16> = aggregated
            .values()
            .flat_map(|by_year| by_year.keys().copied())
            .collect();

        let mut tables = Vec::new();
        for year in years {
            let mut intakes_for_year: Vec<&intake::Model> = aggregated
                .iter()
                .filter(|(_, by_year)| by_year.contains_key(&year))
                .filter_map(|(id, _)| intakes_by_id.get(id).copied())
                .collect();
            intakes_for_year.sort_by(|a, b| {
                a.start_date
                    .cmp(&b.start_date)
                    .then_with(|| a.name.cmp(&b.name))
            });

            for current in intakes_for_year {
                let courses = &aggregated[&current.id][&year];
                let rows: Vec<Vec<Value>> = courses
                    .iter()
                    .map(|(code, row)| {
                        let mut cells = vec![
                            json!(code),
                            json!(row.name),
                            json!(row.course_type),
                            json!(row.credits),
                        ];
                        for column in &columns {
                            cells.push(json!(
                                row.cells.get(column).map(String::as_str).unwrap_or(EMPTY_CELL)
                            ));
                        }
                        cells
                    })
                    .collect();

                if !rows.is_empty() {
                    tables.push(OverviewTable {
                        title: format!(
                            "Year {year} — Intake {} ({})",
                            current.name, current.start_date
                        ),
                        headers: headers.clone(),
                        rows,
                    });
                }
            }
        }

        tables
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::entities::{course, course_delivery, professor};
    use chrono::NaiveDateTime;
    use models::{CourseType, ProfessorType, ProgramType};

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn intake_model(id: u128, name: &str, start: NaiveDate, active: bool) -> intake::Model {
        intake::Model {
            id: Uuid::from_u128(id),
            name: name.to_string(),
            start_date: start,
            end_date: start + chrono::Days::new(100),
            semester: Semester::Fall,
            active,
            created_at: timestamp(),
            updated_at: timestamp(),
        }
    }

    fn program_model(id: u128) -> program::Model {
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

    fn section_of(
        id: u128,
        name: &str,
        campus: Campus,
        course_year: i16,
        intake: &intake::Model,
        program: &program::Model,
    ) -> SectionWithRelations {
        SectionWithRelations {
            section: section::Model {
                id: Uuid::from_u128(id),
                name: name.to_string(),
                intake_id: intake.id,
                campus,
                course_year,
                program_id: Some(program.id),
                joined_academic_year_id: None,
                created_at: timestamp(),
                updated_at: timestamp(),
            },
            intake: intake.clone(),
            program: Some(program.clone()),
        }
    }

    fn course_model(id: u128, code: &str, name: &str) -> course::Model {
        course::Model {
            id: Uuid::from_u128(id),
            code: code.to_string(),
            name: name.to_string(),
            course_type: Some(CourseType::Obligatory),
            credits: 6.0,
            sessions: 15,
            area_id: None,
        }
    }

    fn professor_model(id: u128, name: &str, last_name: &str) -> professor::Model {
        professor::Model {
            id: Uuid::from_u128(id),
            name: name.to_string(),
            last_name: last_name.to_string(),
            email: "someone@example.com".to_string(),
            corporate_email: None,
            phone_number: None,
            campuses: vec![],
            availabilities: vec!["morning".to_string()],
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

    fn cell<'a>(table: &'a OverviewTable, row: usize, header: &str) -> &'a Value {
        let index = table
            .headers
            .iter()
            .position(|h| h == header)
            .expect("header not present");
        &table.rows[row][index]
    }

    #[test]
    fn test_assigned_and_missing_cells() {
        let program = program_model(1);
        let intake = intake_model(2, "Fall 2025", date(2025, 9, 1), true);
        let section = section_of(3, "A", Campus::Segovia, 1, &intake, &program);

        let deliveries = vec![
            delivery(
                10,
                Some(course_model(4, "CS101", "Intro to Computer Science")),
                Some(professor_model(5, "John", "Doe")),
                vec![section.clone()],
            ),
            delivery(
                11,
                Some(course_model(6, "CS102", "Programming I")),
                None,
                vec![section.clone()],
            ),
        ];

        let tables =
            ProgramOverviewService::build_tables(program.id, &[section], &deliveries);
        assert_eq!(tables.len(), 1);

        let table = &tables[0];
        assert_eq!(table.title, "Year 1 — Intake Fall 2025 (2025-09-01)");
        assert_eq!(
            table.headers,
            vec!["Code", "Course", "Type", "Credits", "Segovia A"]
        );
        // rows sorted by course code
        assert_eq!(cell(table, 0, "Code"), &json!("CS101"));
        assert_eq!(cell(table, 0, "Segovia A"), &json!("John Doe"));
        assert_eq!(cell(table, 1, "Code"), &json!("CS102"));
        assert_eq!(cell(table, 1, "Segovia A"), &json!("Missing"));
    }

    #[test]
    fn test_column_set_is_identical_across_tables() {
        let program = program_model(1);
        let fall = intake_model(2, "Fall 2025", date(2025, 9, 1), true);
        let spring = intake_model(3, "Spring 2026", date(2026, 1, 10), true);

        // Segovia section only exists in fall, Madrid only in spring
        let fall_section = section_of(4, "A", Campus::Segovia, 1, &fall, &program);
        let spring_section = section_of(5, "B", Campus::MadridA, 1, &spring, &program);

        let deliveries = vec![
            delivery(
                10,
                Some(course_model(6, "CS101", "Intro")),
                None,
                vec![fall_section.clone()],
            ),
            delivery(
                11,
                Some(course_model(7, "CS102", "Programming I")),
                None,
                vec![spring_section.clone()],
            ),
        ];

        let tables = ProgramOverviewService::build_tables(
            program.id,
            &[fall_section, spring_section],
            &deliveries,
        );
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].headers, tables[1].headers);
        // the column missing from a table's own intake renders the empty cell
        assert_eq!(cell(&tables[0], 0, "Madrid IE Tower B"), &json!("—"));
        assert_eq!(cell(&tables[1], 0, "Segovia A"), &json!("—"));
    }

    #[test]
    fn test_tables_ordered_by_year_then_start_date() {
        let program = program_model(1);
        let fall = intake_model(2, "Fall 2025", date(2025, 9, 1), true);
        let spring = intake_model(3, "Spring 2026", date(2026, 1, 10), true);

        let year2_fall = section_of(4, "A", Campus::Segovia, 2, &fall, &program);
        let year1_spring = section_of(5, "A", Campus::Segovia, 1, &spring, &program);
        let year1_fall = section_of(6, "B", Campus::Segovia, 1, &fall, &program);

        let course = course_model(7, "CS101", "Intro");
        let deliveries = vec![
            delivery(10, Some(course.clone()), None, vec![year2_fall.clone()]),
            delivery(11, Some(course.clone()), None, vec![year1_spring.clone()]),
            delivery(12, Some(course), None, vec![year1_fall.clone()]),
        ];

        let tables = ProgramOverviewService::build_tables(
            program.id,
            &[year2_fall, year1_spring, year1_fall],
            &deliveries,
        );

        let titles: Vec<&str> = tables.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Year 1 — Intake Fall 2025 (2025-09-01)",
                "Year 1 — Intake Spring 2026 (2026-01-10)",
                "Year 2 — Intake Fall 2025 (2025-09-01)",
            ]
        );
    }

    #[test]
    fn test_later_delivery_overwrites_the_cell() {
        let program = program_model(1);
        let intake = intake_model(2, "Fall 2025", date(2025, 9, 1), true);
        let section = section_of(3, "A", Campus::Segovia, 1, &intake, &program);
        let course = course_model(4, "CS101", "Intro");

        let deliveries = vec![
            delivery(
                10,
                Some(course.clone()),
                Some(professor_model(5, "John", "Doe")),
                vec![section.clone()],
            ),
            delivery(
                11,
                Some(course),
                Some(professor_model(6, "Jane", "Roe")),
                vec![section.clone()],
            ),
        ];

        let tables =
            ProgramOverviewService::build_tables(program.id, &[section], &deliveries);
        assert_eq!(cell(&tables[0], 0, "Segovia A"), &json!("Jane Roe"));
    }

    #[test]
    fn test_unknown_course_bucket() {
        let program = program_model(1);
        let intake = intake_model(2, "Fall 2025", date(2025, 9, 1), true);
        let section = section_of(3, "A", Campus::Segovia, 1, &intake, &program);

        let deliveries = vec![delivery(
            10,
            None,
            Some(professor_model(5, "John", "Doe")),
            vec![section.clone()],
        )];

        let tables =
            ProgramOverviewService::build_tables(program.id, &[section], &deliveries);
        assert_eq!(cell(&tables[0], 0, "Code"), &json!("UNKNOWN"));
        assert_eq!(cell(&tables[0], 0, "Course"), &json!("Unknown Course"));
        assert_eq!(cell(&tables[0], 0, "Credits"), &json!(0.0));
    }

    #[test]
    fn test_inactive_intake_sections_are_excluded() {
        let program = program_model(1);
        let inactive = intake_model(2, "Fall 2024", date(2024, 9, 1), false);
        let section = section_of(3, "A", Campus::Segovia, 1, &inactive, &program);

        let deliveries = vec![delivery(
            10,
            Some(course_model(4, "CS101", "Intro")),
            None,
            vec![section],
        )];

        // active-only section discovery never surfaces the inactive section
        let tables = ProgramOverviewService::build_tables(program.id, &[], &deliveries);
        assert!(tables.is_empty());
    }

    #[test]
    fn test_no_data_builds_no_tables() {
        let program = program_model(1);
        let tables = ProgramOverviewService::build_tables(program.id, &[], &[]);
        assert!(tables.is_empty());
    }
}
