//! Built-in site content.
//!
//! Shown whenever the store has no active rows for a collection, and used
//! as-is for the pages that are never stored (history, team, mission,
//! contact).

use charity_db::entities::{
    AboutContent, BankAccount, Banner, BannerPosition, BoardStaff, Cause, Certification,
    DonateContent, GalleryImage, HealthTip, LogoSettings, ProgramContent, Project, ProjectStatus,
    QrCode, Service, Statistic,
};
use serde::Serialize;

/// Organization name used in copy and alt text.
pub const ORGANIZATION_NAME: &str = "Sarvodaya Seva Trust";

const IMG: &str = "https://images.unsplash.com";

fn img(path: &str) -> String {
    format!("{IMG}/{path}?auto=format&fit=crop&w=1200&q=80")
}

fn s(value: &str) -> String {
    value.to_string()
}

fn opt(value: &str) -> Option<String> {
    Some(value.to_string())
}

// === Stored collections ===

fn banner(id: &str, image: &str, title: &str, subtitle: &str, position: BannerPosition) -> Banner {
    Banner {
        id: s(id),
        image_url: img(image),
        title: opt(title),
        subtitle: opt(subtitle),
        position,
        ..Default::default()
    }
}

/// Home page hero slides.
#[must_use]
pub fn home_banners() -> Vec<Banner> {
    vec![
        banner(
            "default-banner-1",
            "photo-1488521787991-ed7bbaae773c",
            "Together We Can Change Lives",
            "Food, care and education for those who need it most",
            BannerPosition::Center,
        ),
        banner(
            "default-banner-2",
            "photo-1469571486292-0ba58a3f068b",
            "Healthcare For Every Village",
            "Free medical camps reaching remote communities",
            BannerPosition::Left,
        ),
        banner(
            "default-banner-3",
            "photo-1509099836639-18ba1795216d",
            "Every Child Deserves A Future",
            "Support a child's education today",
            BannerPosition::Right,
        ),
    ]
}

/// Old-age home hero slides.
#[must_use]
pub fn oldage_banners() -> Vec<Banner> {
    vec![banner(
        "default-oldage-banner-1",
        "photo-1516307365426-bea591f05011",
        "A Home With Dignity",
        "Care, companionship and comfort for our elders",
        BannerPosition::Center,
    )]
}

/// Children home hero slides.
#[must_use]
pub fn children_banners() -> Vec<Banner> {
    vec![banner(
        "default-children-banner-1",
        "photo-1503454537195-1dcabb73ffb9",
        "Safe Homes, Bright Futures",
        "Shelter, schooling and love for children in need",
        BannerPosition::Center,
    )]
}

/// About section shown on Home and About.
#[must_use]
pub fn about_content() -> AboutContent {
    AboutContent {
        id: s("default-about"),
        title: s("About Us"),
        subtitle: opt("Serving communities since 1998"),
        description: s(
            "We are a registered non-profit working across healthcare, disaster relief, \
             elder care and child welfare. Our volunteers and staff reach thousands of \
             families every year with support that is practical and lasting.",
        ),
        mission: opt(
            "To provide care, dignity and opportunity to the most vulnerable members of society.",
        ),
        vision: opt("A world where no one is left behind for lack of food, care or education."),
        image_url: img("photo-1559027615-cd4628902d4a"),
        ..Default::default()
    }
}

fn service(icon: &str, title: &str, description: &str) -> Service {
    Service {
        icon: s(icon),
        title: s(title),
        description: s(description),
    }
}

fn statistic(number: &str, label: &str) -> Statistic {
    Statistic {
        number: s(number),
        label: s(label),
    }
}

/// Relief program block.
#[must_use]
pub fn relief_content() -> ProgramContent {
    ProgramContent {
        id: s("default-relief"),
        title: s("Disaster Relief"),
        subtitle: opt("Standing with communities in crisis"),
        description: s(
            "When floods, cyclones or droughts strike, our relief teams deliver food, \
             clean water, shelter kits and medical aid within hours.",
        ),
        image_url: img("photo-1547683905-f686c993aae5"),
        services: vec![
            service("package", "Emergency Supplies", "Food, water and hygiene kits for affected families."),
            service("home", "Temporary Shelter", "Tents and tarpaulins for displaced households."),
            service("truck", "Rapid Response", "Volunteer teams on the ground within 24 hours."),
        ],
        statistics: vec![
            statistic("25,000+", "Families Reached"),
            statistic("40+", "Relief Operations"),
            statistic("300+", "Volunteers"),
        ],
        ..Default::default()
    }
}

/// Medical program block.
#[must_use]
pub fn medical_content() -> ProgramContent {
    ProgramContent {
        id: s("default-medical"),
        title: s("Medical Care"),
        subtitle: opt("Healthcare that reaches every doorstep"),
        description: s(
            "Our free medical camps and mobile clinics bring doctors, medicines and \
             diagnostics to villages that have no hospital nearby.",
        ),
        image_url: img("photo-1576091160399-112ba8d25d1d"),
        services: vec![
            service("stethoscope", "Free Health Camps", "Monthly checkups in rural areas."),
            service("pill", "Free Medicines", "Essential medicines dispensed at no cost."),
            service("eye", "Eye Care", "Screening and cataract surgeries for the elderly."),
        ],
        statistics: vec![
            statistic("50,000+", "Patients Treated"),
            statistic("120+", "Camps Organized"),
            statistic("35", "Partner Doctors"),
        ],
        health_tips: vec![
            HealthTip {
                title: s("Stay Hydrated"),
                description: s("Drink at least eight glasses of clean water every day."),
                icon: s("droplet"),
            },
            HealthTip {
                title: s("Wash Your Hands"),
                description: s("Wash with soap before meals and after using the toilet."),
                icon: s("hand"),
            },
            HealthTip {
                title: s("Regular Checkups"),
                description: s("Visit a doctor once a year even when you feel well."),
                icon: s("heart"),
            },
        ],
        ..Default::default()
    }
}

/// Old-age home program block.
#[must_use]
pub fn oldage_content() -> ProgramContent {
    ProgramContent {
        id: s("default-oldage"),
        title: s("Old Age Home"),
        subtitle: opt("Caring for those who cared for us"),
        description: s(
            "Our home gives elders a safe place to live with nutritious meals, \
             medical attention and a community of friends.",
        ),
        image_url: img("photo-1516307365426-bea591f05011"),
        services: vec![
            service("utensils", "Nutritious Meals", "Three balanced meals a day."),
            service("activity", "Medical Attention", "Daily health monitoring and a resident nurse."),
            service("users", "Companionship", "Group activities, prayer and outings."),
        ],
        statistics: vec![statistic("60", "Residents"), statistic("24/7", "Care")],
        ..Default::default()
    }
}

/// Children home program block.
#[must_use]
pub fn children_content() -> ProgramContent {
    ProgramContent {
        id: s("default-children"),
        title: s("Children Home"),
        subtitle: opt("A family for every child"),
        description: s(
            "Orphaned and abandoned children find a safe home with us, along with \
             schooling, healthcare and the care of dedicated house parents.",
        ),
        image_url: img("photo-1503454537195-1dcabb73ffb9"),
        services: vec![
            service("book", "Education", "School fees, books and tutoring."),
            service("heart", "Care", "House parents and counselling."),
            service("smile", "Recreation", "Sports, music and art every week."),
        ],
        statistics: vec![statistic("85", "Children"), statistic("100%", "School Enrollment")],
        ..Default::default()
    }
}

fn gallery(prefix: &str, images: &[(&str, &str)]) -> Vec<GalleryImage> {
    images
        .iter()
        .zip(0..)
        .map(|((path, caption), sort_order)| GalleryImage {
            id: format!("default-{prefix}-{sort_order}"),
            image_url: img(path),
            caption: opt(caption),
            sort_order,
            ..Default::default()
        })
        .collect()
}

/// Home page gallery strip.
#[must_use]
pub fn home_gallery() -> Vec<GalleryImage> {
    gallery(
        "home-gallery",
        &[
            ("photo-1488521787991-ed7bbaae773c", "Food distribution drive"),
            ("photo-1469571486292-0ba58a3f068b", "Village health camp"),
            ("photo-1509099836639-18ba1795216d", "Back to school"),
            ("photo-1516307365426-bea591f05011", "Evening at the old-age home"),
        ],
    )
}

/// General gallery on the About page.
#[must_use]
pub fn gallery_images() -> Vec<GalleryImage> {
    gallery(
        "gallery",
        &[
            ("photo-1559027615-cd4628902d4a", "Volunteers at work"),
            ("photo-1532629345422-7515f3d16bb6", "Community meeting"),
            ("photo-1593113598332-cd288d649433", "Tree plantation day"),
        ],
    )
}

/// Relief page gallery.
#[must_use]
pub fn relief_gallery() -> Vec<GalleryImage> {
    gallery(
        "relief-gallery",
        &[
            ("photo-1547683905-f686c993aae5", "Flood relief kits"),
            ("photo-1469571486292-0ba58a3f068b", "Relief camp"),
        ],
    )
}

/// Medical page gallery.
#[must_use]
pub fn medical_gallery() -> Vec<GalleryImage> {
    gallery(
        "medical-gallery",
        &[
            ("photo-1576091160399-112ba8d25d1d", "Health checkup"),
            ("photo-1584515933487-779824d29309", "Eye screening"),
        ],
    )
}

/// Old-age home gallery.
#[must_use]
pub fn oldage_gallery() -> Vec<GalleryImage> {
    gallery(
        "oldage-gallery",
        &[("photo-1516307365426-bea591f05011", "Morning prayers")],
    )
}

/// Children home gallery.
#[must_use]
pub fn children_gallery() -> Vec<GalleryImage> {
    gallery(
        "children-gallery",
        &[("photo-1503454537195-1dcabb73ffb9", "Art class")],
    )
}

/// The six causes shown on Home when none are stored.
#[must_use]
pub fn causes() -> Vec<Cause> {
    [
        (
            "Education for Children",
            "Sponsor school fees, uniforms and books for a child.",
            "photo-1509099836639-18ba1795216d",
        ),
        (
            "Healthcare Access",
            "Fund medical camps and free medicines in rural villages.",
            "photo-1576091160399-112ba8d25d1d",
        ),
        (
            "Elder Care",
            "Give our elders meals, medicines and companionship.",
            "photo-1516307365426-bea591f05011",
        ),
        (
            "Disaster Relief",
            "Help families rebuild after floods and cyclones.",
            "photo-1547683905-f686c993aae5",
        ),
        (
            "Clean Water",
            "Install wells and filters in water-scarce villages.",
            "photo-1541544741938-0af808871cc0",
        ),
        (
            "Women Empowerment",
            "Skill training and micro-loans for women entrepreneurs.",
            "photo-1573497019940-1c28c88b4f3e",
        ),
    ]
    .into_iter()
    .zip(0..)
    .map(|((title, description, image), sort_order)| Cause {
        id: format!("default-cause-{sort_order}"),
        title: s(title),
        description: s(description),
        image_url: img(image),
        sort_order,
        ..Default::default()
    })
    .collect()
}

/// Board members shown when none are stored.
#[must_use]
pub fn board_staff() -> Vec<BoardStaff> {
    [
        ("Dr. Ramesh Iyer", "Founder & Chairman", "photo-1560250097-0b93528c311a"),
        ("Meena Krishnan", "Secretary", "photo-1573496359142-b8d87734a5a2"),
        ("Arjun Patel", "Treasurer", "photo-1519085360753-af0119f7cbe7"),
        ("Dr. Fatima Sheikh", "Medical Director", "photo-1559839734-2b71ea197ec2"),
        ("Joseph Mathew", "Programs Head", "photo-1507003211169-0a1dd7228f2d"),
    ]
    .into_iter()
    .zip(0..)
    .map(|((name, designation, image), sort_order)| BoardStaff {
        id: format!("default-board-{sort_order}"),
        name: s(name),
        designation: s(designation),
        description: None,
        image_url: img(image),
        sort_order,
        ..Default::default()
    })
    .collect()
}

/// Projects shown when none are stored.
#[must_use]
pub fn projects() -> Vec<Project> {
    [
        (
            "Rural Health Outreach",
            "Mobile clinics serving 40 villages.",
            "Tamil Nadu",
            ProjectStatus::Ongoing,
            "photo-1576091160399-112ba8d25d1d",
        ),
        (
            "School Library Program",
            "Libraries set up in 25 government schools.",
            "Karnataka",
            ProjectStatus::Completed,
            "photo-1509099836639-18ba1795216d",
        ),
        (
            "Cyclone Shelter Rebuild",
            "Rebuilding community shelters along the coast.",
            "Odisha",
            ProjectStatus::Ongoing,
            "photo-1547683905-f686c993aae5",
        ),
        (
            "Skill Center for Women",
            "A tailoring and computer training center.",
            "Kerala",
            ProjectStatus::Planning,
            "photo-1573497019940-1c28c88b4f3e",
        ),
    ]
    .into_iter()
    .zip(0..)
    .map(
        |((title, description, location, project_status, image), sort_order)| Project {
            id: format!("default-project-{sort_order}"),
            title: s(title),
            description: s(description),
            image_url: img(image),
            location: opt(location),
            project_status,
            sort_order,
            ..Default::default()
        },
    )
    .collect()
}

/// Certifications shown when none are stored. Only some carry a PDF.
#[must_use]
pub fn certifications() -> Vec<Certification> {
    vec![
        Certification {
            id: s("default-cert-0"),
            certificate_name: s("12A Registration"),
            description: opt("Income tax exemption for the trust."),
            image_url: img("photo-1589829545856-d10d557cf95f"),
            pdf_url: opt("/documents/12a-registration.pdf"),
            issued_by: opt("Income Tax Department"),
            sort_order: 0,
            ..Default::default()
        },
        Certification {
            id: s("default-cert-1"),
            certificate_name: s("80G Certificate"),
            description: opt("Donations are eligible for tax deduction."),
            image_url: img("photo-1554224155-6726b3ff858f"),
            pdf_url: opt("/documents/80g-certificate.pdf"),
            issued_by: opt("Income Tax Department"),
            sort_order: 1,
            ..Default::default()
        },
        Certification {
            id: s("default-cert-2"),
            certificate_name: s("Trust Registration"),
            description: opt("Registered public charitable trust."),
            image_url: img("photo-1450101499163-c8848c66ca85"),
            pdf_url: None,
            issued_by: opt("Registrar of Trusts"),
            sort_order: 2,
            ..Default::default()
        },
    ]
}

/// Donation details shown when none are stored.
#[must_use]
pub fn donate_content() -> DonateContent {
    DonateContent {
        id: s("default-donate"),
        title: s("Support Our Work"),
        description: s(
            "Every contribution helps us feed, heal and educate. Donations are \
             eligible for tax exemption under Section 80G.",
        ),
        qr_codes: vec![QrCode {
            label: s("UPI"),
            image_url: s("/images/donate-upi-qr.png"),
        }],
        bank_accounts: vec![BankAccount {
            bank_name: s("State Bank of India"),
            account_name: s(ORGANIZATION_NAME),
            account_number: s("00000012345678"),
            ifsc_code: s("SBIN0000123"),
            branch: opt("Main Branch"),
        }],
        ..Default::default()
    }
}

/// Site logo shown when none is active.
#[must_use]
pub fn logo() -> LogoSettings {
    LogoSettings {
        id: s("default-logo"),
        logo_url: s("/images/logo.png"),
        alt_text: opt(ORGANIZATION_NAME),
        is_active: true,
        ..Default::default()
    }
}

// === Static pages ===

/// A point on the history timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Milestone {
    /// Year shown on the timeline.
    pub year: &'static str,
    /// Heading.
    pub title: &'static str,
    /// Body text.
    pub description: &'static str,
}

/// Our History timeline.
pub const HISTORY: &[Milestone] = &[
    Milestone {
        year: "1998",
        title: "Founded",
        description: "Started as a weekend food drive by a group of ten volunteers.",
    },
    Milestone {
        year: "2004",
        title: "First Medical Camp",
        description: "Free health camp for 600 patients in three villages.",
    },
    Milestone {
        year: "2010",
        title: "Old Age Home Opens",
        description: "A home for 20 elders, since expanded to 60 residents.",
    },
    Milestone {
        year: "2015",
        title: "Children Home",
        description: "Shelter and schooling for orphaned and abandoned children.",
    },
    Milestone {
        year: "2021",
        title: "Relief Network",
        description: "Rapid response teams established across four states.",
    },
];

/// A staff bio on Our Team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamBio {
    /// Full name.
    pub name: &'static str,
    /// Job title.
    pub role: &'static str,
    /// Short biography.
    pub bio: &'static str,
    /// Image (URL or inline data URI).
    pub image_url: &'static str,
}

/// Our Team bios.
pub const TEAM: &[TeamBio] = &[
    TeamBio {
        name: "Lakshmi Narayan",
        role: "Executive Director",
        bio: "Leads operations and partnerships, with twenty years in the social sector.",
        image_url: "/images/team/lakshmi.jpg",
    },
    TeamBio {
        name: "Suresh Kumar",
        role: "Volunteer Coordinator",
        bio: "Manages a network of over 300 active volunteers.",
        image_url: "/images/team/suresh.jpg",
    },
    TeamBio {
        name: "Anita Das",
        role: "Head Nurse",
        bio: "Runs daily care at the old-age home and the medical camps.",
        image_url: "/images/team/anita.jpg",
    },
];

/// A core value on Our Mission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoreValue {
    /// Icon name understood by the front end.
    pub icon: &'static str,
    /// Heading.
    pub title: &'static str,
    /// Body text.
    pub description: &'static str,
}

/// Mission statement.
pub const MISSION: &str =
    "To provide care, dignity and opportunity to the most vulnerable members of society.";

/// Vision statement.
pub const VISION: &str =
    "A world where no one is left behind for lack of food, care or education.";

/// Core values on Our Mission.
pub const VALUES: &[CoreValue] = &[
    CoreValue {
        icon: "heart",
        title: "Compassion",
        description: "We serve every person with kindness and respect.",
    },
    CoreValue {
        icon: "shield",
        title: "Integrity",
        description: "Every rupee is accounted for and reported openly.",
    },
    CoreValue {
        icon: "users",
        title: "Community",
        description: "We work alongside the people we serve.",
    },
];

/// Contact details on the Contact page and footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetails {
    /// Postal address.
    pub address: &'static str,
    /// Phone number.
    pub phone: &'static str,
    /// Contact email address.
    pub email: &'static str,
    /// Office opening hours.
    pub office_hours: &'static str,
}

/// Organization contact details.
pub const CONTACT: ContactDetails = ContactDetails {
    address: "12 Gandhi Road, Chennai, Tamil Nadu 600001",
    phone: "+91 44 1234 5678",
    email: "info@sarvodayaseva.org",
    office_hours: "Mon-Sat, 9:00 AM - 6:00 PM",
};

/// A navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    /// Link text.
    pub label: &'static str,
    /// Link target path.
    pub href: &'static str,
}

/// Footer quick links.
pub const FOOTER_LINKS: &[Link] = &[
    Link { label: "About Us", href: "/about" },
    Link { label: "Projects", href: "/projects" },
    Link { label: "Certifications", href: "/certifications" },
    Link { label: "Donate", href: "/donate" },
    Link { label: "Contact", href: "/contact" },
];

/// Footer program links.
pub const PROGRAM_LINKS: &[Link] = &[
    Link { label: "Medical Care", href: "/medical" },
    Link { label: "Disaster Relief", href: "/relief" },
    Link { label: "Old Age Home", href: "/oldage-home" },
    Link { label: "Children Home", href: "/children-home" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use charity_db::entities::Record;
    use std::collections::HashSet;

    #[test]
    fn test_exactly_six_causes() {
        let causes = causes();
        assert_eq!(causes.len(), 6);
        let ids: HashSet<&str> = causes.iter().map(Record::id).collect();
        assert_eq!(ids.len(), 6);
        assert!(causes.iter().all(Record::is_active));
    }

    #[test]
    fn test_some_certifications_lack_a_pdf() {
        let certs = certifications();
        assert!(certs.iter().any(|c| c.pdf_link().is_some()));
        assert!(certs.iter().any(|c| c.pdf_link().is_none()));
    }

    #[test]
    fn test_only_medical_carries_health_tips() {
        assert!(!medical_content().health_tips.is_empty());
        assert!(relief_content().health_tips.is_empty());
        assert!(oldage_content().health_tips.is_empty());
        assert!(children_content().health_tips.is_empty());
    }

    #[test]
    fn test_default_logo_is_active() {
        assert!(logo().is_active);
    }
}
