use chrono::Weekday;
use serde::Serialize;

use super::{Document, DomainError, Metric, Percent, Profile, ViolationRecord};

const DOCUMENT_ROWS: usize = 11;
const VIOLATION_ROWS: usize = 5;
const BREAKDOWN_COLUMNS: usize = 2;
const BREAKDOWN_ROWS: usize = 6;

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Figures behind the statistics page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsSummary {
    pub compliance: Vec<Metric>,
    pub violation_types: u32,
    pub weekdays: Vec<Weekday>,
    /// Metric columns, drawn side by side
    pub breakdown: Vec<Vec<Metric>>,
    /// Audit section headings, populated only by the audit layout
    pub sections: Vec<String>,
}

impl StatsSummary {
    pub fn metrics(&self) -> impl Iterator<Item = &Metric> {
        self.compliance
            .iter()
            .chain(self.breakdown.iter().flatten())
    }
}

/// Everything the dashboard displays
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    pub profile: Profile,
    pub documents: Vec<Document>,
    pub violations: Vec<ViolationRecord>,
    pub stats: StatsSummary,
}

impl Catalog {
    /// The fixed dashboard content.
    ///
    /// Rows are repeated copies of one sample record; nothing here is fetched or computed.
    pub fn builtin() -> Result<Self, DomainError> {
        let profile = Profile {
            name: "Ковалева Ксения".to_string(),
            organization: "ООО LeanVision".to_string(),
        };

        let document = Document::new("Стандарт санитарной обработки.pdf", 2_516_582);
        let documents = vec![document; DOCUMENT_ROWS];

        let violation = ViolationRecord::new(
            "09-24-2025 22:04:15",
            "сотрудник не убрал рабочую поверхность, при отсутствии заказов",
            "проинформировать сотрудников о правилах в Вашем заведении, сделать чек-лист и прикрепить на видное место",
        )?;
        let violations = vec![violation; VIOLATION_ROWS];

        let sample = Percent::new(93)?;
        let compliance = vec![Metric::new("Индекс соответствия СанПиН", sample); 2];
        let column = vec![Metric::new("Нет головного убора", sample); BREAKDOWN_ROWS];
        let breakdown = vec![column; BREAKDOWN_COLUMNS];

        let stats = StatsSummary {
            compliance,
            violation_types: 20,
            weekdays: WEEK.to_vec(),
            breakdown,
            sections: vec![
                "Технология приготовления".to_string(),
                "Внешний вид".to_string(),
                "Санитария".to_string(),
            ],
        };

        Ok(Self {
            profile,
            documents,
            violations,
            stats,
        })
    }
}
