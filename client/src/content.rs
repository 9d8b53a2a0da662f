//! Static page content: projects, gallery images, the parts list and the
//! reveal keys every section registers.

use folio::reveal::RevealZone;

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

#[derive(Debug, Clone, Copy)]
pub struct GalleryImage {
    pub src: &'static str,
    pub alt: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
    /// Stable identifier; the modal is `modal-<id>`, the card button `expand-<id>`.
    pub id: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub tags: &'static [&'static str],
    /// Markdown body of the detail modal.
    pub details: &'static str,
    pub gallery: &'static [GalleryImage],
    /// Whether the modal links to the parts panel.
    pub has_parts: bool,
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: "uwfe",
        title: "Formula Electric Powertrain",
        summary: "Accumulator and motor controller packaging for a student formula car.",
        tags: &["SolidWorks", "FEA", "Sheet metal"],
        details: "\
Led mechanical design of the accumulator container for the team's fourth car.

- Segment enclosures in **5052 aluminium** with fire-rated dividers
- Mounting validated with FEA against a 40 g longitudinal load case
- Cut pack mass by 11% over the previous season

| Metric | Previous car | This car |
|--------|--------------|----------|
| Pack mass | 52 kg | 46 kg |
| Service time | 45 min | 20 min |
",
        gallery: &[
            GalleryImage { src: "images/uwfe-accumulator.jpg", alt: "Accumulator container on the bench" },
            GalleryImage { src: "images/uwfe-car.jpg", alt: "Car at the competition track" },
        ],
        has_parts: true,
    },
    Project {
        id: "telemetry",
        title: "Wireless Telemetry Node",
        summary: "CAN-to-LoRa bridge streaming live vehicle data to the pit.",
        tags: &["Embedded C", "KiCad", "CAN"],
        details: "\
A small board that listens on the vehicle CAN bus and forwards selected frames
over LoRa at 10 Hz.

1. Two-layer PCB designed in KiCad
2. Firmware with a ring-buffered CAN filter
3. Pit-side dashboard reading the serial stream

Range tested to 1.2 km line of sight.
",
        gallery: &[GalleryImage { src: "images/telemetry-board.jpg", alt: "Assembled telemetry board" }],
        has_parts: false,
    },
    Project {
        id: "gripper",
        title: "Compliant Robotic Gripper",
        summary: "A single-piece printed gripper that adapts to irregular objects.",
        tags: &["Compliant mechanisms", "3D printing", "Python"],
        details: "\
Flexure-based fingers printed in TPU, driven by one servo.

- Grasp success of 92% across a 30-object test set
- Finger geometry tuned with a small Python optimisation loop
",
        gallery: &[
            GalleryImage { src: "images/gripper-open.jpg", alt: "Gripper open" },
            GalleryImage { src: "images/gripper-closed.jpg", alt: "Gripper holding a pear" },
        ],
        has_parts: false,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Part {
    pub name: &'static str,
    pub process: &'static str,
    pub material: &'static str,
}

/// Parts listed in the parts panel.
pub const PARTS: &[Part] = &[
    Part { name: "Accumulator container", process: "Laser cut, brake formed, riveted", material: "5052-H32 aluminium" },
    Part { name: "Segment divider", process: "Waterjet", material: "Mica laminate" },
    Part { name: "Motor controller bracket", process: "CNC milled", material: "6061-T6 aluminium" },
    Part { name: "Cooling manifold", process: "SLA print", material: "High-temp resin" },
    Part { name: "Firewall panel", process: "Hand layup", material: "Carbon fibre / Nomex core" },
];

/// Document the resume panel embeds.
pub const RESUME_URL: &str = "resume.pdf";

/// Hero section id; the logo links back to it.
pub const HOME_ID: &str = "top";
pub const HOME_ANCHOR: &str = "#top";

pub const NAV_LINKS: &[(&str, &str)] =
    &[("#about", "About"), ("#projects", "Projects"), ("#contact", "Contact")];

/// Reveal keys. Each is also the DOM id of the element it drives.
pub mod reveal_keys {
    pub const HERO_GREETING: &str = "hero-greeting";
    pub const HERO_NAME: &str = "hero-name";
    pub const HERO_TAGLINE: &str = "hero-tagline";
    pub const HERO_ACTIONS: &str = "hero-actions";
    pub const HERO_VISUAL: &str = "hero-visual";
    pub const ABOUT_TITLE: &str = "about-title";
    pub const ABOUT_CONTENT: &str = "about-content";
    pub const PROJECTS_TITLE: &str = "projects-title";
    pub const CONTACT_TITLE: &str = "contact-title";
    pub const CONTACT_BODY: &str = "contact-body";

    /// Key of a project card.
    #[must_use]
    pub fn project_card(project_id: &str) -> String {
        format!("project-{project_id}")
    }
}

/// Identifiers of every project, in display order.
#[must_use]
pub fn project_ids() -> Vec<&'static str> {
    PROJECTS.iter().map(|project| project.id).collect()
}

/// Every reveal key with its zone. Hero pop-ins are listed in entrance order.
#[must_use]
pub fn reveal_entries() -> Vec<(String, RevealZone)> {
    use reveal_keys::*;

    let mut entries: Vec<(String, RevealZone)> = [HERO_GREETING, HERO_NAME, HERO_TAGLINE, HERO_ACTIONS]
        .into_iter()
        .map(|key| (key.to_owned(), RevealZone::Stagger))
        .collect();
    entries.push((HERO_VISUAL.to_owned(), RevealZone::Immediate));
    entries.push((ABOUT_TITLE.to_owned(), RevealZone::Heading));
    entries.push((ABOUT_CONTENT.to_owned(), RevealZone::Body));
    entries.push((PROJECTS_TITLE.to_owned(), RevealZone::Viewport));
    entries.extend(PROJECTS.iter().map(|project| (project_card(project.id), RevealZone::Viewport)));
    entries.push((CONTACT_TITLE.to_owned(), RevealZone::Viewport));
    entries.push((CONTACT_BODY.to_owned(), RevealZone::Viewport));
    entries
}
