use std::fs;
use std::path::Path;

use anyhow::Context;
use roster_core::{Activity, Catalog};

/// The catalog served when no catalog file is configured.
pub fn builtin_catalog() -> Catalog {
    let mut catalog = Catalog::default();

    catalog.insert(
        "Chess Club",
        Activity::new(
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
        )
        .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
    );
    catalog.insert(
        "Programming Class",
        Activity::new(
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
        )
        .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
    );
    catalog.insert(
        "Gym Class",
        Activity::new(
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
        )
        .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
    );
    catalog.insert(
        "Soccer Team",
        Activity::new(
            "Join the school soccer team and compete in interschool matches",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            22,
        )
        .with_participants(["liam@mergington.edu", "noah@mergington.edu"]),
    );
    catalog.insert(
        "Basketball Club",
        Activity::new(
            "Practice basketball skills and play friendly games",
            "Wednesdays, 3:30 PM - 5:00 PM",
            15,
        )
        .with_participants(["ava@mergington.edu", "mia@mergington.edu"]),
    );
    catalog.insert(
        "Tennis Team",
        Activity::new(
            "Train for and compete in tennis matches",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            10,
        )
        .with_participants(["lucas@mergington.edu", "isabella@mergington.edu"]),
    );
    catalog.insert(
        "Art Studio",
        Activity::new(
            "Explore painting, drawing, and sculpture techniques",
            "Thursdays, 3:30 PM - 5:00 PM",
            16,
        )
        .with_participants(["amelia@mergington.edu", "harper@mergington.edu"]),
    );
    catalog.insert(
        "Drama Club",
        Activity::new(
            "Act, direct, and produce plays and performances",
            "Mondays and Wednesdays, 3:30 PM - 5:00 PM",
            20,
        )
        .with_participants(["ella@mergington.edu", "scarlett@mergington.edu"]),
    );
    catalog.insert(
        "Debate Team",
        Activity::new(
            "Develop public speaking and argumentation skills",
            "Fridays, 4:00 PM - 5:30 PM",
            12,
        )
        .with_participants(["charlotte@mergington.edu", "henry@mergington.edu"]),
    );

    catalog
}

/// Load and validate a catalog from a TOML file.
pub fn load_catalog(path: &Path) -> anyhow::Result<Catalog> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog file {}", path.display()))?;
    let catalog: Catalog = toml::from_str(&raw)
        .with_context(|| format!("failed to parse catalog file {}", path.display()))?;
    catalog
        .validate()
        .with_context(|| format!("invalid catalog file {}", path.display()))?;

    Ok(catalog)
}
