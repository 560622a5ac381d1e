//! JSON Export
//!
//! Serializes the records a page is composed from, without any terminal styling.

use serde::Serialize;

use crate::app::{DownloadsLayout, NavLink, Page, PanelLayouts, StatsLayout, NAV_LINKS};
use crate::domain::{weekday_label, Catalog, Document, Metric, StatsSummary, ViolationRecord};
use crate::ui::assets::{Asset, AVATAR, DOCUMENT, LOGO, UPLOAD, WORDMARK};
use crate::ui::panels::{downloads, recs, stats};

#[derive(Debug, Serialize)]
struct ExportableAsset {
    path: &'static str,
    alt: &'static str,
}

impl ExportableAsset {
    fn new(asset: Asset, alt: &'static str) -> Self {
        Self {
            path: asset.path,
            alt,
        }
    }
}

#[derive(Debug, Serialize)]
struct ExportableProfile {
    name: String,
    organization: String,
    avatar: ExportableAsset,
}

#[derive(Debug, Serialize)]
struct ExportableDocument {
    name: String,
    size_bytes: u64,
    size: String,
    icon: &'static str,
}

impl From<&Document> for ExportableDocument {
    fn from(doc: &Document) -> Self {
        Self {
            name: doc.name.clone(),
            size_bytes: doc.size_bytes,
            size: doc.display_size(),
            icon: DOCUMENT.path,
        }
    }
}

#[derive(Debug, Serialize)]
struct ExportableViolation {
    recorded_at: String,
    violation: String,
    recommendation: String,
}

impl From<&ViolationRecord> for ExportableViolation {
    fn from(record: &ViolationRecord) -> Self {
        Self {
            recorded_at: record.display_time(),
            violation: record.violation.clone(),
            recommendation: record.recommendation.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ExportableMetric {
    label: String,
    value: u8,
}

impl From<&Metric> for ExportableMetric {
    fn from(metric: &Metric) -> Self {
        Self {
            label: metric.label.clone(),
            value: metric.value.value(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum ExportableContent {
    Downloads {
        title: &'static str,
        layout: DownloadsLayout,
        hint: &'static str,
        upload_icon: &'static str,
        history_heading: &'static str,
        documents: Vec<ExportableDocument>,
    },
    Recs {
        title: &'static str,
        violations: Vec<ExportableViolation>,
    },
    Stats {
        title: &'static str,
        layout: StatsLayout,
        compliance: Vec<ExportableMetric>,
        violation_types: u32,
        distribution_heading: &'static str,
        weekdays: Vec<&'static str>,
        breakdown: Vec<Vec<ExportableMetric>>,
        /// Empty unless the audit layout is active
        sections: Vec<String>,
    },
}

impl ExportableContent {
    fn downloads(documents: &[Document], layout: DownloadsLayout) -> Self {
        let documents = match layout {
            DownloadsLayout::Listing => documents.iter().map(ExportableDocument::from).collect(),
            DownloadsLayout::Hint => Vec::new(),
        };
        Self::Downloads {
            title: downloads::TITLE,
            layout,
            hint: downloads::UPLOAD_HINT,
            upload_icon: UPLOAD.path,
            history_heading: downloads::HISTORY_HEADING,
            documents,
        }
    }

    fn stats(summary: &StatsSummary, layout: StatsLayout) -> Self {
        let sections = match layout {
            StatsLayout::Summary => Vec::new(),
            StatsLayout::Audit => summary.sections.clone(),
        };
        Self::Stats {
            title: stats::TITLE,
            layout,
            compliance: summary.compliance.iter().map(ExportableMetric::from).collect(),
            violation_types: summary.violation_types,
            distribution_heading: stats::DISTRIBUTION_HEADING,
            weekdays: summary.weekdays.iter().copied().map(weekday_label).collect(),
            breakdown: summary
                .breakdown
                .iter()
                .map(|column| column.iter().map(ExportableMetric::from).collect())
                .collect(),
            sections,
        }
    }
}

/// View model of one page shell
#[derive(Debug, Serialize)]
pub struct PageSnapshot {
    route: &'static str,
    title: &'static str,
    logo: ExportableAsset,
    profile: ExportableProfile,
    links: Vec<NavLink>,
    content: ExportableContent,
}

impl PageSnapshot {
    pub fn new(page: Page, catalog: &Catalog, layouts: PanelLayouts) -> Self {
        let content = match page {
            Page::Downloads => ExportableContent::downloads(&catalog.documents, layouts.downloads),
            Page::Recs => ExportableContent::Recs {
                title: recs::TITLE,
                violations: catalog
                    .violations
                    .iter()
                    .map(ExportableViolation::from)
                    .collect(),
            },
            Page::Stats => ExportableContent::stats(&catalog.stats, layouts.stats),
        };

        Self {
            route: page.route(),
            title: page.title(),
            logo: ExportableAsset::new(LOGO, WORDMARK),
            profile: ExportableProfile {
                name: catalog.profile.name.clone(),
                organization: catalog.profile.organization.clone(),
                avatar: ExportableAsset::new(AVATAR, "avatar"),
            },
            links: NAV_LINKS.to_vec(),
            content,
        }
    }
}
