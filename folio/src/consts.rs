//! Shared constants: default timings and the page's stable surface names.

// ── Focus ───────────────────────────────────────────────────────

/// Delay before focus moves into a freshly opened overlay, in milliseconds.
pub const FOCUS_DELAY_MS: u32 = 100;

// ── Reveal ──────────────────────────────────────────────────────

/// Grace period before the viewport watch is attached, in milliseconds.
pub const REVEAL_GRACE_MS: u32 = 1500;

/// Fraction of an element that must be inside the trigger region.
pub const REVEAL_THRESHOLD: f64 = 0.15;

/// The trigger region is the viewport shrunk by this many pixels at the bottom.
pub const REVEAL_BOTTOM_INSET_PX: u32 = 100;

/// Gap between consecutive pop-in elements, in milliseconds.
pub const STAGGER_STEP_MS: u32 = 150;

/// Offset applied to every pop-in timer, in milliseconds.
pub const STAGGER_INITIAL_MS: u32 = 100;

/// Extra pause between the last pop-in item and the trailing heading.
pub const HEADING_GAP_MS: u32 = 200;

/// How far the trailing body lags behind its heading.
pub const BODY_TRAIL_MS: u32 = 300;

// ── Surfaces ────────────────────────────────────────────────────

/// Prefix of every project modal identifier (`modal-<projectId>`).
pub const PROJECT_MODAL_PREFIX: &str = "modal-";

/// Shared background behind the project modals.
pub const MODAL_BACKDROP: &str = "modalOverlay";

/// Image viewer layered above everything else.
pub const LIGHTBOX: &str = "lightbox";

/// Image element inside the lightbox.
pub const LIGHTBOX_IMAGE: &str = "lightboxImg";

/// Resume panel.
pub const RESUME: &str = "resumeModal";

/// Parts list panel.
pub const PARTS: &str = "uwfeModal";

/// Mobile navigation toggle button.
pub const NAV_TOGGLE: &str = "navToggle";

/// Navigation menu.
pub const NAV_MENU: &str = "navMenu";

/// Contact form.
pub const CONTACT_FORM: &str = "contactForm";

/// Optional `<script type="application/json">` block overriding [`crate::config::Timing`].
pub const CONFIG_SCRIPT: &str = "folio-config";

/// Canvas hosting the decorative ornament.
pub const ORNAMENT_CANVAS: &str = "hero3d";

/// Pseudo-surface addressing document-level listeners.
pub const DOCUMENT: &str = "document";

// ── Controls ────────────────────────────────────────────────────

/// Prefix of every project card's expand button (`expand-<projectId>`).
pub const EXPAND_PREFIX: &str = "expand-";

/// Close button shared by all project modals.
pub const MODAL_CLOSE: &str = "modal-close";

/// Any button that opens the resume panel.
pub const RESUME_BUTTON: &str = "resume-btn";

/// Resume panel close button.
pub const RESUME_CLOSE: &str = "resume-modal-close";

/// Button inside a project modal that opens the parts panel.
pub const PARTS_BUTTON: &str = "uwfe-parts-btn";

/// Parts panel close button.
pub const PARTS_CLOSE: &str = "uwfe-modal-close";

/// Lightbox close button.
pub const LIGHTBOX_CLOSE: &str = "lightbox-close";

/// Any gallery image inside a project modal.
pub const GALLERY_IMAGE: &str = "gallery-img";

/// Any link inside the navigation menu.
pub const NAV_LINK: &str = "nav-link";
