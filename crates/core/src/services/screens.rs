//! Admin screen catalog.
//!
//! Each screen binds the generic editor to one table and one field list.

use charity_db::entities::{BannerPosition, ProjectStatus};
use charity_db::store::Table;
use serde::Serialize;

use super::editor::{Field, FormSchema};

/// One admin screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Screen {
    /// URL segment.
    pub slug: &'static str,
    #[serde(skip)]
    pub table: Table,
    /// Singular noun used in messages.
    pub entity: &'static str,
    /// Heading of the list view.
    pub title: &'static str,
    /// Whether image uploads are held to the size limit.
    pub limit_uploads: bool,
    /// Whether at most one row may be active at a time.
    pub single_active: bool,
}

impl Screen {
    const fn new(slug: &'static str, table: Table, entity: &'static str, title: &'static str) -> Self {
        Self {
            slug,
            table,
            entity,
            title,
            limit_uploads: false,
            single_active: false,
        }
    }

    const fn with_upload_limit(mut self) -> Self {
        self.limit_uploads = true;
        self
    }

    const fn with_single_active(mut self) -> Self {
        self.single_active = true;
        self
    }

    /// Message shown when any write on this screen fails.
    #[must_use]
    pub fn save_error(&self) -> String {
        format!("Error saving {}. Please try again.", self.entity)
    }

    /// Call to action shown on an empty list.
    #[must_use]
    pub fn empty_state(&self) -> String {
        format!("Add your first {}", self.entity)
    }

    /// Field list of this screen's form.
    #[must_use]
    pub fn schema(&self) -> FormSchema {
        match self.table {
            Table::Banners | Table::OldageBanners | Table::ChildrenBanners => banner_schema(),
            Table::AboutContent => about_schema(),
            Table::MedicalContent => program_schema(true),
            Table::ReliefContent | Table::OldageContent | Table::ChildrenContent => {
                program_schema(false)
            }
            Table::HomeGallery
            | Table::GalleryImages
            | Table::ReliefGallery
            | Table::MedicalGallery
            | Table::OldageGallery
            | Table::ChildrenGallery => gallery_schema(),
            Table::Causes => cause_schema(),
            Table::Projects => project_schema(),
            Table::Certifications => certification_schema(),
            Table::BoardStaff => board_staff_schema(),
            Table::DonateContent => donate_schema(),
            Table::LogoSettings => logo_schema(),
        }
    }
}

pub const BANNERS: Screen =
    Screen::new("banners", Table::Banners, "banner", "Home Banners").with_upload_limit();
pub const OLDAGE_BANNERS: Screen = Screen::new(
    "oldage-banners",
    Table::OldageBanners,
    "old-age home banner",
    "Old Age Home Banners",
);
pub const CHILDREN_BANNERS: Screen = Screen::new(
    "children-banners",
    Table::ChildrenBanners,
    "children home banner",
    "Children Home Banners",
);
pub const ABOUT: Screen =
    Screen::new("about", Table::AboutContent, "about content", "About Section");
pub const RELIEF_CONTENT: Screen = Screen::new(
    "relief-content",
    Table::ReliefContent,
    "relief content",
    "Relief Program",
);
pub const MEDICAL_CONTENT: Screen = Screen::new(
    "medical-content",
    Table::MedicalContent,
    "medical content",
    "Medical Program",
);
pub const OLDAGE_CONTENT: Screen = Screen::new(
    "oldage-content",
    Table::OldageContent,
    "old-age home content",
    "Old Age Home Program",
);
pub const CHILDREN_CONTENT: Screen = Screen::new(
    "children-content",
    Table::ChildrenContent,
    "children home content",
    "Children Home Program",
);
pub const HOME_GALLERY: Screen =
    Screen::new("home-gallery", Table::HomeGallery, "home gallery image", "Home Gallery");
pub const GALLERY_IMAGES: Screen =
    Screen::new("gallery-images", Table::GalleryImages, "gallery image", "Gallery");
pub const RELIEF_GALLERY: Screen = Screen::new(
    "relief-gallery",
    Table::ReliefGallery,
    "relief gallery image",
    "Relief Gallery",
);
pub const MEDICAL_GALLERY: Screen = Screen::new(
    "medical-gallery",
    Table::MedicalGallery,
    "medical gallery image",
    "Medical Gallery",
);
pub const OLDAGE_GALLERY: Screen = Screen::new(
    "oldage-gallery",
    Table::OldageGallery,
    "old-age home gallery image",
    "Old Age Home Gallery",
);
pub const CHILDREN_GALLERY: Screen = Screen::new(
    "children-gallery",
    Table::ChildrenGallery,
    "children home gallery image",
    "Children Home Gallery",
);
pub const CAUSES: Screen = Screen::new("causes", Table::Causes, "cause", "Causes");
pub const PROJECTS: Screen = Screen::new("projects", Table::Projects, "project", "Projects");
pub const CERTIFICATIONS: Screen = Screen::new(
    "certifications",
    Table::Certifications,
    "certification",
    "Certifications",
)
.with_upload_limit();
pub const BOARD_STAFF: Screen = Screen::new(
    "board-staff",
    Table::BoardStaff,
    "board member",
    "Board & Staff",
)
.with_upload_limit();
pub const DONATE: Screen =
    Screen::new("donate", Table::DonateContent, "donation details", "Donate Page");
pub const LOGOS: Screen = Screen::new("logos", Table::LogoSettings, "logo", "Logos")
    .with_upload_limit()
    .with_single_active();

/// Every admin screen, in navigation order.
pub const ALL: [Screen; 20] = [
    BANNERS,
    OLDAGE_BANNERS,
    CHILDREN_BANNERS,
    ABOUT,
    RELIEF_CONTENT,
    MEDICAL_CONTENT,
    OLDAGE_CONTENT,
    CHILDREN_CONTENT,
    HOME_GALLERY,
    GALLERY_IMAGES,
    RELIEF_GALLERY,
    MEDICAL_GALLERY,
    OLDAGE_GALLERY,
    CHILDREN_GALLERY,
    CAUSES,
    PROJECTS,
    CERTIFICATIONS,
    BOARD_STAFF,
    DONATE,
    LOGOS,
];

fn banner_schema() -> FormSchema {
    FormSchema::new(vec![
        Field::image("image_url", "Banner Image").required(),
        Field::text("title", "Title").nullable(),
        Field::text_area("subtitle", "Subtitle").nullable(),
        Field::select("position", "Text Position", &BannerPosition::VALUES, "center"),
        Field::checkbox("is_active", "Active", true),
    ])
}

fn about_schema() -> FormSchema {
    FormSchema::new(vec![
        Field::text("title", "Title").required(),
        Field::text("subtitle", "Subtitle").nullable(),
        Field::text_area("description", "Description").required(),
        Field::text_area("mission", "Mission").nullable(),
        Field::text_area("vision", "Vision").nullable(),
        Field::image("image_url", "Image"),
        Field::checkbox("is_active", "Active", true),
    ])
}

fn program_schema(with_health_tips: bool) -> FormSchema {
    let mut fields = vec![
        Field::text("title", "Title").required(),
        Field::text("subtitle", "Subtitle").nullable(),
        Field::text_area("description", "Description").required(),
        Field::image("image_url", "Image"),
        Field::repeatable(
            "services",
            "Services",
            "Service",
            vec![
                Field::text("icon", "Icon"),
                Field::text("title", "Title").required(),
                Field::text_area("description", "Description"),
            ],
        ),
        Field::repeatable(
            "statistics",
            "Statistics",
            "Statistic",
            vec![
                Field::text("number", "Number").required(),
                Field::text("label", "Label").required(),
            ],
        ),
    ];
    if with_health_tips {
        fields.push(Field::repeatable(
            "health_tips",
            "Health Tips",
            "Health tip",
            vec![
                Field::text("title", "Title").required(),
                Field::text_area("description", "Description"),
                Field::text("icon", "Icon"),
            ],
        ));
    }
    fields.push(Field::checkbox("is_active", "Active", true));
    FormSchema::new(fields)
}

fn gallery_schema() -> FormSchema {
    FormSchema::new(vec![
        Field::image("image_url", "Image").required(),
        Field::text("caption", "Caption").nullable(),
        Field::checkbox("is_active", "Active", true),
    ])
}

fn cause_schema() -> FormSchema {
    FormSchema::new(vec![
        Field::text("title", "Title").required(),
        Field::text_area("description", "Description").required(),
        Field::image("image_url", "Image").required(),
        Field::checkbox("is_active", "Active", true),
    ])
}

fn project_schema() -> FormSchema {
    FormSchema::new(vec![
        Field::text("title", "Title").required(),
        Field::text_area("description", "Description").required(),
        Field::image("image_url", "Image"),
        Field::text("location", "Location").nullable(),
        Field::select("project_status", "Status", &ProjectStatus::VALUES, "ongoing"),
        Field::checkbox("is_active", "Active", true),
    ])
}

fn certification_schema() -> FormSchema {
    FormSchema::new(vec![
        Field::text("certificate_name", "Certificate Name").required(),
        Field::text_area("description", "Description").nullable(),
        Field::image("image_url", "Certificate Image").required(),
        Field::url("pdf_url", "PDF Link").nullable(),
        Field::text("issued_by", "Issued By").nullable(),
        Field::checkbox("is_active", "Active", true),
    ])
}

fn board_staff_schema() -> FormSchema {
    FormSchema::new(vec![
        Field::text("name", "Name").required(),
        Field::text("designation", "Designation").required(),
        Field::text_area("description", "Description").nullable(),
        Field::image("image_url", "Photo"),
        Field::checkbox("is_active", "Active", true),
    ])
}

fn donate_schema() -> FormSchema {
    FormSchema::new(vec![
        Field::text("title", "Title").required(),
        Field::text_area("description", "Description").required(),
        Field::repeatable(
            "qr_codes",
            "QR Codes",
            "QR code",
            vec![
                Field::text("label", "Label").required(),
                Field::image("image_url", "QR Image").required(),
            ],
        ),
        Field::repeatable(
            "bank_accounts",
            "Bank Accounts",
            "Bank account",
            vec![
                Field::text("bank_name", "Bank Name").required(),
                Field::text("account_name", "Account Name").required(),
                Field::text("account_number", "Account Number").required(),
                Field::text("ifsc_code", "IFSC Code").required(),
                Field::text("branch", "Branch").nullable(),
            ],
        ),
        Field::checkbox("is_active", "Active", true),
    ])
}

fn logo_schema() -> FormSchema {
    FormSchema::new(vec![
        Field::image("logo_url", "Logo").required(),
        Field::text("alt_text", "Alt Text").nullable(),
        Field::checkbox("is_active", "Active", false),
    ])
}
