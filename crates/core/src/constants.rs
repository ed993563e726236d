//! Seed data and application-wide defaults.
//!
//! New profiles start from the standard Gambian home-build plan; amounts are
//! whole currency units (dalasi by default).

/// Default display currency for new profiles.
pub const DEFAULT_CURRENCY: &str = "GMD";

/// Opening savings balance for a freshly created profile.
pub const DEFAULT_CURRENT_SAVINGS: i64 = 485_000;

/// Opening automated monthly contribution.
pub const DEFAULT_MONTHLY_CONTRIBUTION: i64 = 75_000;

/// Months between sign-up and the default target build date.
pub const DEFAULT_TARGET_MONTHS_AHEAD: u32 = 30;

/// Seeded sub-goals: (slug, display name, amount).
pub const DEFAULT_GOALS: [(&str, &str, i64); 4] = [
    ("land", "Land Purchase", 750_000),
    ("foundation", "Foundation", 500_000),
    ("structure", "Structure to Roof", 850_000),
    ("finishing", "Finishing", 400_000),
];

/// Seeded escrow milestone schedule: (display name, amount).
///
/// Order matters: milestones unlock sequentially, so the first entry of a
/// fresh schedule starts out ready.
pub const DEFAULT_MILESTONES: [(&str, i64); 4] = [
    ("Land Title Verification", 250_000),
    ("Foundation Materials", 500_000),
    ("Contractor Draw 1", 750_000),
    ("Roofing Materials", 400_000),
];
