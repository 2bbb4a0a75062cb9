//! Static page content: sections, skills, projects, copy.

/// A top-level page section, addressable from the nav.
pub struct Section {
    pub id: &'static str,
    pub title: &'static str,
}

pub const SECTIONS: [Section; 5] = [
    Section { id: "home", title: "Home" },
    Section { id: "about", title: "About" },
    Section { id: "skills", title: "Skills" },
    Section { id: "projects", title: "Projects" },
    Section { id: "contact", title: "Contact" },
];

pub const OWNER: &str = "Alex Rivera";

/// Revealed one character at a time in the hero section.
pub const TAGLINE: &str = "Web Developer and Data Scientist";

pub const ABOUT: [&str; 3] = [
    "I build data products end to end: collection pipelines, models, and the \
     interfaces people use to explore the results.",
    "By day I work on full-stack web applications; by night I train models \
     and lose arguments with my own feature engineering.",
    "Previously at a logistics startup, where I learned that every dashboard \
     is a promise someone has to keep.",
];

/// A skill with its meter percentage.
pub struct Skill {
    pub name: &'static str,
    pub percent: u8,
}

pub const SKILLS: [Skill; 6] = [
    Skill { name: "JavaScript", percent: 90 },
    Skill { name: "Python", percent: 85 },
    Skill { name: "HTML & CSS", percent: 95 },
    Skill { name: "SQL", percent: 80 },
    Skill { name: "Machine Learning", percent: 75 },
    Skill { name: "Data Visualization", percent: 82 },
];

/// A gallery entry. `art` is the full-size image shown in the lightbox.
pub struct Project {
    pub title: &'static str,
    pub summary: &'static str,
    pub art: &'static str,
    pub caption: &'static str,
}

pub const PROJECTS: [Project; 3] = [
    Project {
        title: "Insight Dashboard",
        summary: "Streaming analytics dashboard with drill-down charts.",
        art: r"
  .--------------------------.
  | ▁▂▄▆█  revenue    +12.4% |
  |--------------------------|
  |  ▄▄                      |
  |  ██ ▄▄    ▄▄   ▄▄        |
  |  ██ ██ ▄▄ ██ ▄ ██ ▄▄     |
  '--------------------------'",
        caption: "Live metrics for a fleet of delivery vans.",
    },
    Project {
        title: "Shop Lite",
        summary: "A storefront that renders in under 50 KB of assets.",
        art: r"
  .--------------------------.
  |  SHOP LITE          [=]  |
  |--------------------------|
  |  [img]  [img]  [img]     |
  |  boots  lamp   chair     |
  |  $79    $24    $140      |
  '--------------------------'",
        caption: "Checkout in three keystrokes.",
    },
    Project {
        title: "Churn Radar",
        summary: "Customer churn prediction with weekly retraining.",
        art: r"
  .--------------------------.
  |  CHURN RADAR             |
  |--------------------------|
  |  risk  ...*              |
  |        ..*..*            |
  |        *......*....*     |
  '--------------------------'",
        caption: "Gradient boosting, calibrated monthly.",
    },
];

/// Stable element id for a skill's meter fill.
pub fn skill_fill_id(index: usize) -> String {
    format!("skill-fill-{index}")
}

/// Stable element id for a skill's meter row, watched for reveal.
pub fn skill_bar_id(index: usize) -> String {
    format!("skill-bar-{index}")
}

/// Stable element id for a project card in the gallery.
pub fn project_card_id(index: usize) -> String {
    format!("project-{index}")
}
