//! Demo content for the showcase
//! Slide payloads for the hero, testimonial and project carousels

use egui::Color32;

/// Hero banner slide
#[derive(Debug, Clone)]
pub struct HeroSlide {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub call_to_action: &'static str,
    /// Background tint standing in for the photograph
    pub tint: Color32,
}

/// Customer quote
#[derive(Debug, Clone)]
pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub designation: &'static str,
}

/// Construction status used by the project tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Ongoing,
    Completed,
    Upcoming,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [Self::Ongoing, Self::Completed, Self::Upcoming];

    pub fn label(self) -> &'static str {
        match self {
            Self::Ongoing => "Ongoing",
            Self::Completed => "Completed",
            Self::Upcoming => "Upcoming",
        }
    }
}

/// Project card
#[derive(Debug, Clone)]
pub struct Project {
    pub title: &'static str,
    pub location: &'static str,
    pub status: ProjectStatus,
    pub tint: Color32,
}

/// A headline figure for the stats row
pub struct Stat {
    pub value: f64,
    pub decimals: usize,
    pub suffix: &'static str,
    pub caption: &'static str,
}

pub fn hero_slides() -> Vec<HeroSlide> {
    vec![
        HeroSlide {
            title: "Building Tomorrow",
            subtitle: "Landmark Living",
            description: "Residences designed around light, air and the city skyline",
            call_to_action: "Explore Projects",
            tint: Color32::from_rgb(46, 64, 98),
        },
        HeroSlide {
            title: "Crafted Interiors",
            subtitle: "Detail in Every Room",
            description: "Premium finishes selected and installed by our own interior studio",
            call_to_action: "View Interiors",
            tint: Color32::from_rgb(92, 70, 48),
        },
        HeroSlide {
            title: "Green by Design",
            subtitle: "Excellence Delivered",
            description: "Sustainable building practices combined with premium materials",
            call_to_action: "Quality Standards",
            tint: Color32::from_rgb(38, 84, 66),
        },
    ]
}

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            quote: "Handover was on the promised date and the finish quality exceeded the show flat.",
            name: "Rahim Chowdhury",
            designation: "Lake View Resident",
        },
        Testimonial {
            quote: "The team answered every question during construction. We always knew where things stood.",
            name: "Nusrat Jahan",
            designation: "Palm Court Owner",
        },
        Testimonial {
            quote: "Professional service from start to finish. We are extremely satisfied with our investment.",
            name: "Fatema Begum",
            designation: "Rivery Complex Owner",
        },
    ]
}

pub fn projects() -> Vec<Project> {
    let project = |title, location, status, tint| Project {
        title,
        location,
        status,
        tint,
    };
    vec![
        project("Lake View", "Gulshan", ProjectStatus::Ongoing, Color32::from_rgb(52, 72, 110)),
        project("Green Acre", "Uttara", ProjectStatus::Completed, Color32::from_rgb(44, 90, 70)),
        project("Rivery Complex", "Bashundhara", ProjectStatus::Completed, Color32::from_rgb(70, 60, 96)),
        project("Palm Court", "Banani", ProjectStatus::Ongoing, Color32::from_rgb(96, 76, 50)),
        project("Skyline Tower", "Dhanmondi", ProjectStatus::Upcoming, Color32::from_rgb(60, 60, 70)),
        project("Harbour Point", "Mirpur", ProjectStatus::Completed, Color32::from_rgb(40, 80, 100)),
    ]
}

pub fn stats() -> Vec<Stat> {
    vec![
        Stat { value: 120.0, decimals: 0, suffix: "+", caption: "Projects delivered" },
        Stat { value: 3500.0, decimals: 0, suffix: "+", caption: "Happy families" },
        Stat { value: 15.0, decimals: 0, suffix: "", caption: "Years of experience" },
        Stat { value: 4.5, decimals: 1, suffix: "M", caption: "Square feet built" },
    ]
}
