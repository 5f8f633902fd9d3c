use crate::entities::{
    area, course, course_delivery, course_delivery_section, intake, professor, program, section,
};
use chrono::NaiveDate;
use models::Semester;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

/// Section together with its eagerly loaded intake and program
#[derive(Clone, Debug)]
pub struct SectionWithRelations {
    pub section: section::Model,
    pub intake: intake::Model,
    pub program: Option<program::Model>,
}

/// Course delivery together with every related row the report builders read
#[derive(Clone, Debug)]
pub struct DeliveryWithRelations {
    pub delivery: course_delivery::Model,
    pub course: Option<course::Model>,
    pub course_area: Option<area::Model>,
    pub professor: Option<professor::Model>,
    pub sections: Vec<SectionWithRelations>,
}

/// Narrows the delivery set through its associated sections
#[derive(Clone, Copy, Debug, Default)]
pub struct DeliveryFilter {
    pub program_id: Option<Uuid>,
    pub intake_id: Option<Uuid>,
    pub semester: Option<Semester>,
}

impl DeliveryFilter {
    pub fn is_empty(&self) -> bool {
        self.program_id.is_none() && self.intake_id.is_none() && self.semester.is_none()
    }
}

pub struct DeliveryQueryService;

impl DeliveryQueryService {
    /// Intakes whose [start, end] date range contains `date` (both ends
    /// inclusive), newest first. An empty result is a success.
    pub async fn intakes_overlapping(
        db: &DatabaseConnection,
        date: NaiveDate,
    ) -> Result<Vec<intake::Model>, DbErr> {
        intake::Entity::find()
            .filter(intake::Column::StartDate.lte(date))
            .filter(intake::Column::EndDate.gte(date))
            .order_by_desc(intake::Column::StartDate)
            .all(db)
            .await
    }

    /// All sections of the given intakes with intake and program attached
    pub async fn sections_with_relations(
        db: &DatabaseConnection,
        intake_ids: &[Uuid],
    ) -> Result<Vec<SectionWithRelations>, DbErr> {
        if intake_ids.is_empty() {
            return Ok(vec![]);
        }

        let sections = section::Entity::find()
            .filter(section::Column::IntakeId.is_in(intake_ids.iter().copied()))
            .all(db)
            .await?;

        Self::attach_section_relations(db, sections).await
    }

    /// Sections of one program, optionally restricted to intakes whose
    /// manual `active` flag is set
    pub async fn sections_of_program(
        db: &DatabaseConnection,
        program_id: Uuid,
        active_only: bool,
    ) -> Result<Vec<SectionWithRelations>, DbErr> {
        let sections = section::Entity::find()
            .filter(section::Column::ProgramId.eq(program_id))
            .all(db)
            .await?;

        let mut sections = Self::attach_section_relations(db, sections).await?;
        if active_only {
            sections.retain(|s| s.intake.active);
        }

        Ok(sections)
    }

    /// Unassigned deliveries touching at least one section of the given
    /// intakes, deduplicated, fully eager-loaded
    pub async fn deliveries_missing_professor(
        db: &DatabaseConnection,
        intake_ids: &[Uuid],
    ) -> Result<Vec<DeliveryWithRelations>, DbErr> {
        if intake_ids.is_empty() {
            return Ok(vec![]);
        }

        let section_ids: Vec<Uuid> = section::Entity::find()
            .select_only()
            .column(section::Column::Id)
            .filter(section::Column::IntakeId.is_in(intake_ids.iter().copied()))
            .into_tuple()
            .all(db)
            .await?;

        let delivery_ids = Self::delivery_ids_for_sections(db, &section_ids).await?;
        if delivery_ids.is_empty() {
            return Ok(vec![]);
        }

        let deliveries = course_delivery::Entity::find()
            .filter(course_delivery::Column::ProfessorId.is_null())
            .filter(course_delivery::Column::Id.is_in(delivery_ids))
            .order_by_asc(course_delivery::Column::Id)
            .all(db)
            .await?;

        Self::load_bundles(db, deliveries).await
    }

    /// All deliveries touching one of the given sections, deduplicated,
    /// fully eager-loaded
    pub async fn deliveries_for_sections(
        db: &DatabaseConnection,
        section_ids: &[Uuid],
    ) -> Result<Vec<DeliveryWithRelations>, DbErr> {
        let delivery_ids = Self::delivery_ids_for_sections(db, section_ids).await?;
        if delivery_ids.is_empty() {
            return Ok(vec![]);
        }

        let deliveries = course_delivery::Entity::find()
            .filter(course_delivery::Column::Id.is_in(delivery_ids))
            .order_by_asc(course_delivery::Column::Id)
            .all(db)
            .await?;

        Self::load_bundles(db, deliveries).await
    }

    /// Deliveries matching the filter, narrowed through their sections;
    /// with no filter set, the whole delivery table is loaded
    pub async fn deliveries_with_relations(
        db: &DatabaseConnection,
        filter: &DeliveryFilter,
    ) -> Result<Vec<DeliveryWithRelations>, DbErr> {
        if filter.is_empty() {
            let deliveries = course_delivery::Entity::find()
                .order_by_asc(course_delivery::Column::Id)
                .all(db)
                .await?;
            return Self::load_bundles(db, deliveries).await;
        }

        let mut condition = Condition::all();
        if let Some(program_id) = filter.program_id {
            condition = condition.add(section::Column::ProgramId.eq(program_id));
        }
        if let Some(intake_id) = filter.intake_id {
            condition = condition.add(section::Column::IntakeId.eq(intake_id));
        }
        if let Some(semester) = filter.semester {
            let intake_ids: Vec<Uuid> = intake::Entity::find()
                .select_only()
                .column(intake::Column::Id)
                .filter(intake::Column::Semester.eq(semester))
                .into_tuple()
                .all(db)
                .await?;
            if intake_ids.is_empty() {
                return Ok(vec![]);
            }
            condition = condition.add(section::Column::IntakeId.is_in(intake_ids));
        }

        let section_ids: Vec<Uuid> = section::Entity::find()
            .select_only()
            .column(section::Column::Id)
            .filter(condition)
            .into_tuple()
            .all(db)
            .await?;

        Self::deliveries_for_sections(db, &section_ids).await
    }

    /// Distinct delivery ids linked to any of the given sections
    async fn delivery_ids_for_sections(
        db: &DatabaseConnection,
        section_ids: &[Uuid],
    ) -> Result<Vec<Uuid>, DbErr> {
        if section_ids.is_empty() {
            return Ok(vec![]);
        }

        let ids: HashSet<Uuid> = course_delivery_section::Entity::find()
            .filter(
                course_delivery_section::Column::SectionId.is_in(section_ids.iter().copied()),
            )
            .all(db)
            .await?
            .into_iter()
            .map(|link| link.course_delivery_id)
            .collect();

        Ok(ids.into_iter().collect())
    }

    /// Attaches intakes and programs to sections with two batched fetches
    async fn attach_section_relations(
        db: &DatabaseConnection,
        sections: Vec<section::Model>,
    ) -> Result<Vec<SectionWithRelations>, DbErr> {
        if sections.is_empty() {
            return Ok(vec![]);
        }

        let intake_ids: HashSet<Uuid> = sections.iter().map(|s| s.intake_id).collect();
        let intakes: HashMap<Uuid, intake::Model> = intake::Entity::find()
            .filter(intake::Column::Id.is_in(intake_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|i| (i.id, i))
            .collect();

        let program_ids: HashSet<Uuid> = sections.iter().filter_map(|s| s.program_id).collect();
        let programs: HashMap<Uuid, program::Model> = if program_ids.is_empty() {
            HashMap::new()
        } else {
            program::Entity::find()
                .filter(program::Column::Id.is_in(program_ids))
                .all(db)
                .await?
                .into_iter()
                .map(|p| (p.id, p))
                .collect()
        };

        Ok(sections
            .into_iter()
            .filter_map(|s| {
                let intake = intakes.get(&s.intake_id).cloned()?;
                let program = s.program_id.and_then(|id| programs.get(&id).cloned());
                Some(SectionWithRelations {
                    intake,
                    program,
                    section: s,
                })
            })
            .collect())
    }

    /// Batch-fetches courses, areas, professors and sections for the given
    /// deliveries and groups them into bundles, never one query per row
    pub async fn load_bundles(
        db: &DatabaseConnection,
        deliveries: Vec<course_delivery::Model>,
    ) -> Result<Vec<DeliveryWithRelations>, DbErr> {
        if deliveries.is_empty() {
            return Ok(vec![]);
        }

        let delivery_ids: Vec<Uuid> = deliveries.iter().map(|d| d.id).collect();
        let links = course_delivery_section::Entity::find()
            .filter(course_delivery_section::Column::CourseDeliveryId.is_in(delivery_ids))
            .all(db)
            .await?;

        let section_ids: HashSet<Uuid> = links.iter().map(|l| l.section_id).collect();
        let sections = if section_ids.is_empty() {
            vec![]
        } else {
            section::Entity::find()
                .filter(section::Column::Id.is_in(section_ids))
                .all(db)
                .await?
        };
        let section_map: HashMap<Uuid, SectionWithRelations> =
            Self::attach_section_relations(db, sections)
                .await?
                .into_iter()
                .map(|s| (s.section.id, s))
                .collect();

        let course_ids: HashSet<Uuid> = deliveries.iter().filter_map(|d| d.course_id).collect();
        let courses: HashMap<Uuid, course::Model> = if course_ids.is_empty() {
            HashMap::new()
        } else {
            course::Entity::find()
                .filter(course::Column::Id.is_in(course_ids))
                .all(db)
                .await?
                .into_iter()
                .map(|c| (c.id, c))
                .collect()
        };

        let area_ids: HashSet<Uuid> = courses.values().filter_map(|c| c.area_id).collect();
        let areas: HashMap<Uuid, area::Model> = if area_ids.is_empty() {
            HashMap::new()
        } else {
            area::Entity::find()
                .filter(area::Column::Id.is_in(area_ids))
                .all(db)
                .await?
                .into_iter()
                .map(|a| (a.id, a))
                .collect()
        };

        let professor_ids: HashSet<Uuid> =
            deliveries.iter().filter_map(|d| d.professor_id).collect();
        let professors: HashMap<Uuid, professor::Model> = if professor_ids.is_empty() {
            HashMap::new()
        } else {
            professor::Entity::find()
                .filter(professor::Column::Id.is_in(professor_ids))
                .all(db)
                .await?
                .into_iter()
                .map(|p| (p.id, p))
                .collect()
        };

        let mut sections_by_delivery: HashMap<Uuid, Vec<SectionWithRelations>> = HashMap::new();
        for link in links {
            if let Some(section) = section_map.get(&link.section_id) {
                sections_by_delivery
                    .entry(link.course_delivery_id)
                    .or_default()
                    .push(section.clone());
            }
        }
        for sections in sections_by_delivery.values_mut() {
            sections.sort_by(|a, b| {
                (&a.section.name, a.section.campus, a.intake.id).cmp(&(
                    &b.section.name,
                    b.section.campus,
                    b.intake.id,
                ))
            });
        }

        Ok(deliveries
            .into_iter()
            .map(|delivery| {
                let course = delivery.course_id.and_then(|id| courses.get(&id).cloned());
                let course_area = course
                    .as_ref()
                    .and_then(|c| c.area_id)
                    .and_then(|id| areas.get(&id).cloned());
                DeliveryWithRelations {
                    course,
                    course_area,
                    professor: delivery
                        .professor_id
                        .and_then(|id| professors.get(&id).cloned()),
                    sections: sections_by_delivery.remove(&delivery.id).unwrap_or_default(),
                    delivery,
                }
            })
            .collect())
    }
}
