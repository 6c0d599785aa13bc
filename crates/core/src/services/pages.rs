//! Public page view models.

use charity_db::entities::{
    AboutContent, BankAccount, Banner, BannerPosition, BoardStaff, Cause, Certification,
    DonateContent, GalleryImage, HealthTip, LogoSettings, ProgramContent, Project, ProjectStatus,
    Service, Statistic, is_present,
};
use charity_db::store::Table;
use serde::Serialize;

use super::carousel::{BOARD_STAFF_PER_VIEW, CAUSES_PER_VIEW, Carousel};
use super::content::ContentProvider;
use super::media::{ImageRef, MediaService};
use crate::defaults::{self, ContactDetails, CoreValue, Link, Milestone, TeamBio};

/// Banner slides read per carousel.
pub const BANNER_LIMIT: u64 = 10;
/// Causes read for the home carousel.
pub const CAUSE_LIMIT: u64 = 12;
/// Board and staff cards read per page.
pub const BOARD_STAFF_LIMIT: u64 = 24;
/// Images read per gallery.
pub const GALLERY_LIMIT: u64 = 12;
/// Projects read for the projects page.
pub const PROJECT_LIMIT: u64 = 100;
/// Certifications read for the certifications page.
pub const CERTIFICATION_LIMIT: u64 = 50;

/// Call to action on every cause card.
pub const DONATE_CTA: Link = Link {
    label: "Donate Now",
    href: "/donate",
};

// === Card views ===

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerView {
    pub id: String,
    pub image: ImageRef,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub position: BannerPosition,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutView {
    pub title: String,
    pub subtitle: Option<String>,
    pub description: String,
    pub mission: Option<String>,
    pub vision: Option<String>,
    pub image: ImageRef,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramView {
    pub title: String,
    pub subtitle: Option<String>,
    pub description: String,
    pub image: ImageRef,
    pub services: Vec<Service>,
    pub statistics: Vec<Statistic>,
    pub health_tips: Vec<HealthTip>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItemView {
    pub id: String,
    pub image: ImageRef,
    pub caption: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CauseCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: ImageRef,
    pub cta: Link,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardMemberCard {
    pub id: String,
    pub name: String,
    pub designation: String,
    pub description: Option<String>,
    pub image: ImageRef,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: ImageRef,
    pub location: Option<String>,
    pub status: ProjectStatus,
}

/// Link to a certificate document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PdfLink {
    pub href: String,
    pub label: &'static str,
}

/// A certification card. Without a PDF the card has no badge and no link.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationCard {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub issued_by: Option<String>,
    pub image: ImageRef,
    pub pdf: Option<PdfLink>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QrCodeView {
    pub label: String,
    pub image: ImageRef,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DonateView {
    pub title: String,
    pub description: String,
    pub qr_codes: Vec<QrCodeView>,
    pub bank_accounts: Vec<BankAccount>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoView {
    pub image: ImageRef,
    pub alt: String,
}

/// Site footer, embedded in Home and About and served on its own.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterView {
    pub organization: &'static str,
    pub logo: LogoView,
    pub contact: ContactDetails,
    pub quick_links: &'static [Link],
    pub program_links: &'static [Link],
}

// === Pages ===

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePage {
    pub banners: Vec<BannerView>,
    pub about: AboutView,
    pub causes: Carousel<CauseCard>,
    pub board_staff: Carousel<BoardMemberCard>,
    pub gallery: Vec<GalleryItemView>,
    pub footer: FooterView,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutPage {
    pub about: AboutView,
    pub board_staff: Vec<BoardMemberCard>,
    pub gallery: Vec<GalleryItemView>,
    pub footer: FooterView,
}

#[derive(Debug, Clone, Serialize)]
pub struct HistoryPage {
    pub milestones: &'static [Milestone],
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamPage {
    pub team: &'static [TeamBio],
    pub board_staff: Vec<BoardMemberCard>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MissionPage {
    pub mission: &'static str,
    pub vision: &'static str,
    pub values: &'static [CoreValue],
}

/// Medical and Relief.
#[derive(Debug, Clone, Serialize)]
pub struct ProgramPage {
    pub content: ProgramView,
    pub gallery: Vec<GalleryItemView>,
}

/// Old-age home and Children home.
#[derive(Debug, Clone, Serialize)]
pub struct HomeProgramPage {
    pub banners: Vec<BannerView>,
    pub content: ProgramView,
    pub gallery: Vec<GalleryItemView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusCount {
    /// `None` counts every project.
    pub status: Option<ProjectStatus>,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectsPage {
    pub filter: Option<ProjectStatus>,
    pub counts: Vec<StatusCount>,
    pub projects: Vec<ProjectCard>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CertificationsPage {
    pub certifications: Vec<CertificationCard>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DonatePage {
    pub donate: DonateView,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactPage {
    pub organization: &'static str,
    pub contact: ContactDetails,
}

/// Builds public page view models.
#[derive(Clone)]
pub struct PageService {
    content: ContentProvider,
    media: MediaService,
}

impl PageService {
    /// Create a page service.
    #[must_use]
    pub const fn new(content: ContentProvider, media: MediaService) -> Self {
        Self { content, media }
    }

    /// Home. `cause_index` and `board_index` position the two carousels.
    pub async fn home(&self, cause_index: i64, board_index: i64) -> HomePage {
        let (banners, about, causes, board, gallery, footer) = tokio::join!(
            self.banners(Table::Banners, defaults::home_banners),
            self.about_view(),
            self.content
                .collection(Table::Causes, Some(CAUSE_LIMIT), defaults::causes),
            self.board_cards(),
            self.gallery(Table::HomeGallery, defaults::home_gallery),
            self.footer(),
        );

        let causes = causes.into_iter().map(|c| self.cause_card(c)).collect();

        HomePage {
            banners,
            about,
            causes: Carousel::new(causes, CAUSES_PER_VIEW, cause_index),
            board_staff: Carousel::new(board, BOARD_STAFF_PER_VIEW, board_index),
            gallery,
            footer,
        }
    }

    /// About.
    pub async fn about(&self) -> AboutPage {
        let (about, board_staff, gallery, footer) = tokio::join!(
            self.about_view(),
            self.board_cards(),
            self.gallery(Table::GalleryImages, defaults::gallery_images),
            self.footer(),
        );
        AboutPage {
            about,
            board_staff,
            gallery,
            footer,
        }
    }

    /// Our History.
    #[must_use]
    pub const fn history(&self) -> HistoryPage {
        HistoryPage {
            milestones: defaults::HISTORY,
        }
    }

    /// Our Team.
    pub async fn team(&self) -> TeamPage {
        TeamPage {
            team: defaults::TEAM,
            board_staff: self.board_cards().await,
        }
    }

    /// Our Mission.
    #[must_use]
    pub const fn mission(&self) -> MissionPage {
        MissionPage {
            mission: defaults::MISSION,
            vision: defaults::VISION,
            values: defaults::VALUES,
        }
    }

    /// Medical.
    pub async fn medical(&self) -> ProgramPage {
        let (content, gallery) = tokio::join!(
            self.program(Table::MedicalContent, defaults::medical_content),
            self.gallery(Table::MedicalGallery, defaults::medical_gallery),
        );
        ProgramPage { content, gallery }
    }

    /// Relief.
    pub async fn relief(&self) -> ProgramPage {
        let (content, gallery) = tokio::join!(
            self.program(Table::ReliefContent, defaults::relief_content),
            self.gallery(Table::ReliefGallery, defaults::relief_gallery),
        );
        ProgramPage { content, gallery }
    }

    /// Old-age home.
    pub async fn oldage_home(&self) -> HomeProgramPage {
        let (banners, content, gallery) = tokio::join!(
            self.banners(Table::OldageBanners, defaults::oldage_banners),
            self.program(Table::OldageContent, defaults::oldage_content),
            self.gallery(Table::OldageGallery, defaults::oldage_gallery),
        );
        HomeProgramPage {
            banners,
            content,
            gallery,
        }
    }

    /// Children home.
    pub async fn children_home(&self) -> HomeProgramPage {
        let (banners, content, gallery) = tokio::join!(
            self.banners(Table::ChildrenBanners, defaults::children_banners),
            self.program(Table::ChildrenContent, defaults::children_content),
            self.gallery(Table::ChildrenGallery, defaults::children_gallery),
        );
        HomeProgramPage {
            banners,
            content,
            gallery,
        }
    }

    /// Projects, optionally narrowed to one status. Counts cover every
    /// project read, before the status filter.
    pub async fn projects(&self, filter: Option<ProjectStatus>) -> ProjectsPage {
        let projects: Vec<Project> = self
            .content
            .collection(Table::Projects, Some(PROJECT_LIMIT), defaults::projects)
            .await;

        let mut counts = vec![StatusCount {
            status: None,
            count: projects.len(),
        }];
        counts.extend(ProjectStatus::ALL.into_iter().map(|status| StatusCount {
            status: Some(status),
            count: projects
                .iter()
                .filter(|p| p.project_status == status)
                .count(),
        }));

        let projects = projects
            .into_iter()
            .filter(|p| filter.is_none_or(|status| p.project_status == status))
            .map(|p| ProjectCard {
                image: self.media.image(&p.image_url),
                id: p.id,
                title: p.title,
                description: p.description,
                location: p.location.filter(|l| is_present(Some(l.as_str()))),
                status: p.project_status,
            })
            .collect();

        ProjectsPage {
            filter,
            counts,
            projects,
        }
    }

    /// Certifications.
    pub async fn certifications(&self) -> CertificationsPage {
        let certs: Vec<Certification> = self
            .content
            .collection(
                Table::Certifications,
                Some(CERTIFICATION_LIMIT),
                defaults::certifications,
            )
            .await;

        let certifications = certs
            .into_iter()
            .map(|c| CertificationCard {
                pdf: c.pdf_link().map(|href| PdfLink {
                    href: href.to_string(),
                    label: "PDF",
                }),
                image: self.media.image(&c.image_url),
                id: c.id,
                name: c.certificate_name,
                description: c.description,
                issued_by: c.issued_by,
            })
            .collect();

        CertificationsPage { certifications }
    }

    /// Donate.
    pub async fn donate(&self) -> DonatePage {
        let content: DonateContent = self
            .content
            .latest(Table::DonateContent, defaults::donate_content)
            .await;

        DonatePage {
            donate: DonateView {
                title: content.title,
                description: content.description,
                qr_codes: content
                    .qr_codes
                    .into_iter()
                    .map(|qr| QrCodeView {
                        image: self.media.image(&qr.image_url),
                        label: qr.label,
                    })
                    .collect(),
                bank_accounts: content.bank_accounts,
            },
        }
    }

    /// Contact.
    #[must_use]
    pub const fn contact(&self) -> ContactPage {
        ContactPage {
            organization: defaults::ORGANIZATION_NAME,
            contact: defaults::CONTACT,
        }
    }

    /// Footer with the active logo.
    pub async fn footer(&self) -> FooterView {
        let logo: LogoSettings = self
            .content
            .latest(Table::LogoSettings, defaults::logo)
            .await;

        FooterView {
            organization: defaults::ORGANIZATION_NAME,
            logo: LogoView {
                image: self.media.image(&logo.logo_url),
                alt: logo
                    .alt_text
                    .filter(|a| is_present(Some(a.as_str())))
                    .unwrap_or_else(|| defaults::ORGANIZATION_NAME.to_string()),
            },
            contact: defaults::CONTACT,
            quick_links: defaults::FOOTER_LINKS,
            program_links: defaults::PROGRAM_LINKS,
        }
    }

    // === Collection views ===

    async fn banners(&self, table: Table, default: fn() -> Vec<Banner>) -> Vec<BannerView> {
        self.content
            .collection(table, Some(BANNER_LIMIT), default)
            .await
            .into_iter()
            .map(|b| BannerView {
                image: self.media.image(&b.image_url),
                id: b.id,
                title: b.title,
                subtitle: b.subtitle,
                position: b.position,
            })
            .collect()
    }

    async fn gallery(
        &self,
        table: Table,
        default: fn() -> Vec<GalleryImage>,
    ) -> Vec<GalleryItemView> {
        self.content
            .collection(table, Some(GALLERY_LIMIT), default)
            .await
            .into_iter()
            .map(|g| GalleryItemView {
                image: self.media.image(&g.image_url),
                id: g.id,
                caption: g.caption,
            })
            .collect()
    }

    async fn program(&self, table: Table, default: fn() -> ProgramContent) -> ProgramView {
        let p = self.content.latest(table, default).await;
        ProgramView {
            image: self.media.image(&p.image_url),
            title: p.title,
            subtitle: p.subtitle,
            description: p.description,
            services: p.services,
            statistics: p.statistics,
            health_tips: p.health_tips,
        }
    }

    async fn about_view(&self) -> AboutView {
        let a: AboutContent = self
            .content
            .latest(Table::AboutContent, defaults::about_content)
            .await;
        AboutView {
            image: self.media.image(&a.image_url),
            title: a.title,
            subtitle: a.subtitle,
            description: a.description,
            mission: a.mission,
            vision: a.vision,
        }
    }

    async fn board_cards(&self) -> Vec<BoardMemberCard> {
        let staff: Vec<BoardStaff> = self
            .content
            .collection(Table::BoardStaff, Some(BOARD_STAFF_LIMIT), defaults::board_staff)
            .await;
        staff
            .into_iter()
            .map(|m| BoardMemberCard {
                image: self.media.image(&m.image_url),
                id: m.id,
                name: m.name,
                designation: m.designation,
                description: m.description,
            })
            .collect()
    }

    fn cause_card(&self, cause: Cause) -> CauseCard {
        CauseCard {
            image: self.media.image(&cause.image_url),
            id: cause.id,
            title: cause.title,
            description: cause.description,
            cta: DONATE_CTA,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use charity_db::store::{MemoryStore, SharedStore};
    use charity_db::test_utils::seeded_store;
    use serde_json::json;

    const PLACEHOLDER: &str = "https://img.example/placeholder.jpg";

    fn pages(store: SharedStore) -> PageService {
        PageService::new(
            ContentProvider::new(store),
            MediaService::new(PLACEHOLDER.to_string(), 5 * 1024 * 1024),
        )
    }

    fn empty() -> PageService {
        pages(Arc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn test_home_without_causes_shows_six_donate_cards() {
        let home = empty().home(0, 0).await;

        assert_eq!(home.causes.items.len(), 6);
        assert!(home.causes.items.iter().all(|c| c.cta.label == "Donate Now"));
        assert!(home.causes.items.iter().all(|c| c.cta.href == "/donate"));
        assert_eq!(home.causes.visible().len(), 3);
        assert_eq!(home.causes.max_index, 3);
    }

    #[tokio::test]
    async fn test_home_zero_rows_equals_defaults() {
        let home = empty().home(0, 0).await;

        let titles: Vec<String> = home.banners.iter().filter_map(|b| b.title.clone()).collect();
        let expected: Vec<String> = defaults::home_banners()
            .into_iter()
            .filter_map(|b| b.title)
            .collect();
        assert_eq!(titles, expected);
        assert_eq!(home.about.title, defaults::about_content().title);
        assert_eq!(home.gallery.len(), defaults::home_gallery().len());
        assert_eq!(home.board_staff.items.len(), defaults::board_staff().len());
    }

    #[tokio::test]
    async fn test_home_read_failure_shows_defaults() {
        let store = seeded_store(vec![(
            Table::Causes,
            vec![json!({"id": "c", "title": "Stored", "is_active": true})],
        )])
        .await;
        store.set_fail_reads(true);

        let home = pages(store).home(0, 0).await;
        assert_eq!(home.causes.items.len(), 6);
    }

    #[tokio::test]
    async fn test_home_gallery_reads_at_most_gallery_limit() {
        let rows: Vec<serde_json::Value> = (0..20)
            .map(|i| {
                json!({
                    "id": format!("g{i}"),
                    "image_url": format!("https://img.example/{i}.jpg"),
                    "sort_order": i,
                    "is_active": true
                })
            })
            .collect();
        let store = seeded_store(vec![(Table::HomeGallery, rows)]).await;

        let home = pages(store).home(0, 0).await;

        assert_eq!(home.gallery.len(), GALLERY_LIMIT as usize);
        assert_eq!(home.gallery[0].id, "g0");
    }

    #[tokio::test]
    async fn test_stored_causes_replace_defaults_and_clamp_carousel() {
        let store = seeded_store(vec![(
            Table::Causes,
            vec![
                json!({"id": "a", "title": "A", "is_active": true, "sort_order": 0}),
                json!({"id": "b", "title": "B", "is_active": true, "sort_order": 1}),
            ],
        )])
        .await;

        let home = pages(store).home(7, -1).await;
        assert_eq!(home.causes.items.len(), 2);
        assert_eq!(home.causes.index, 0);
        assert!(home.causes.visible().len() <= 2);
        assert!(home.causes.items.iter().all(|c| c.cta == DONATE_CTA));
    }

    #[tokio::test]
    async fn test_blank_image_uses_placeholder() {
        let store = seeded_store(vec![(
            Table::BoardStaff,
            vec![json!({"id": "m", "name": "Asha", "designation": "Trustee", "image_url": "", "is_active": true})],
        )])
        .await;

        let about = pages(store).about().await;
        assert_eq!(about.board_staff.len(), 1);
        assert_eq!(about.board_staff[0].image.src, PLACEHOLDER);
        assert_eq!(about.board_staff[0].image.fallback_src, PLACEHOLDER);
    }

    #[tokio::test]
    async fn test_certification_without_pdf_has_no_link() {
        let store = seeded_store(vec![(
            Table::Certifications,
            vec![
                json!({"id": "a", "certificate_name": "12A", "pdf_url": "https://docs.example/12a.pdf", "is_active": true, "sort_order": 0}),
                json!({"id": "b", "certificate_name": "80G", "pdf_url": null, "is_active": true, "sort_order": 1}),
                json!({"id": "c", "certificate_name": "FCRA", "pdf_url": "  ", "is_active": true, "sort_order": 2}),
            ],
        )])
        .await;

        let page = pages(store).certifications().await;
        assert_eq!(
            page.certifications[0].pdf,
            Some(PdfLink {
                href: "https://docs.example/12a.pdf".to_string(),
                label: "PDF"
            })
        );
        assert_eq!(page.certifications[1].pdf, None);
        assert_eq!(page.certifications[2].pdf, None);

        let json = serde_json::to_value(&page).unwrap();
        assert!(json["certifications"][1]["pdf"].is_null());
    }

    #[tokio::test]
    async fn test_projects_filter_and_counts() {
        let store = seeded_store(vec![(
            Table::Projects,
            vec![
                json!({"id": "a", "title": "A", "project_status": "ongoing", "is_active": true, "sort_order": 0}),
                json!({"id": "b", "title": "B", "project_status": "completed", "is_active": true, "sort_order": 1}),
                json!({"id": "c", "title": "C", "project_status": "completed", "is_active": true, "sort_order": 2}),
            ],
        )])
        .await;
        let service = pages(store);

        let all = service.projects(None).await;
        assert_eq!(all.projects.len(), 3);
        assert_eq!(all.counts[0].count, 3);

        let completed = service.projects(Some(ProjectStatus::Completed)).await;
        let ids: Vec<&str> = completed.projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c"]);
        let planning = completed
            .counts
            .iter()
            .find(|c| c.status == Some(ProjectStatus::Planning))
            .unwrap();
        assert_eq!(planning.count, 0);
    }

    #[tokio::test]
    async fn test_footer_uses_latest_active_logo() {
        let store = seeded_store(vec![(
            Table::LogoSettings,
            vec![
                json!({"id": "a", "logo_url": "https://img.example/a.png", "is_active": false}),
                json!({"id": "b", "logo_url": "https://img.example/b.png", "alt_text": "Trust", "is_active": true}),
            ],
        )])
        .await;

        let footer = pages(store).footer().await;
        assert_eq!(footer.logo.image.src, "https://img.example/b.png");
        assert_eq!(footer.logo.alt, "Trust");
    }

    #[tokio::test]
    async fn test_program_pages() {
        let store = seeded_store(vec![(
            Table::ReliefContent,
            vec![json!({
                "id": "r",
                "title": "Flood Relief",
                "services": [{"icon": "truck", "title": "Kits", "description": "Food"}],
                "is_active": true
            })],
        )])
        .await;
        let service = pages(store);

        let relief = service.relief().await;
        assert_eq!(relief.content.title, "Flood Relief");
        assert_eq!(relief.content.services.len(), 1);
        assert!(relief.content.health_tips.is_empty());

        let medical = service.medical().await;
        assert_eq!(medical.content.title, defaults::medical_content().title);
        assert!(!medical.content.health_tips.is_empty());
    }
}
