use indexmap::IndexMap;

use crate::models::Activity;

struct SeedActivity {
    name: &'static str,
    description: &'static str,
    schedule: &'static str,
    max_participants: u32,
    participants: &'static [&'static str],
}

const SEED_ACTIVITIES: &[SeedActivity] = &[
    SeedActivity {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 12,
        participants: &["michael@mergington.edu", "daniel@mergington.edu"],
    },
    SeedActivity {
        name: "Programming Class",
        description: "Learn programming fundamentals and build software projects",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        max_participants: 20,
        participants: &["emma@mergington.edu", "sophia@mergington.edu"],
    },
    SeedActivity {
        name: "Gym Class",
        description: "Physical education and sports activities",
        schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        max_participants: 30,
        participants: &["john@mergington.edu", "olivia@mergington.edu"],
    },
    SeedActivity {
        name: "Basketball Team",
        description: "Competitive basketball training and games",
        schedule: "Tuesdays and Thursdays, 4:00 PM - 6:00 PM",
        max_participants: 15,
        participants: &["james@mergington.edu"],
    },
    SeedActivity {
        name: "Soccer Club",
        description: "Practice soccer skills and compete in local matches",
        schedule: "Wednesdays and Fridays, 3:30 PM - 5:30 PM",
        max_participants: 22,
        participants: &["lucas@mergington.edu", "mia@mergington.edu"],
    },
    SeedActivity {
        name: "Art Club",
        description: "Explore painting, drawing and other visual arts",
        schedule: "Mondays, 3:30 PM - 5:00 PM",
        max_participants: 18,
        participants: &["ava@mergington.edu"],
    },
    SeedActivity {
        name: "Drama Club",
        description: "Act, direct and produce school theater performances",
        schedule: "Thursdays, 4:00 PM - 6:00 PM",
        max_participants: 25,
        participants: &["ethan@mergington.edu", "isabella@mergington.edu"],
    },
    SeedActivity {
        name: "Science Club",
        description: "Hands-on experiments and science fair preparation",
        schedule: "Wednesdays, 3:30 PM - 4:30 PM",
        max_participants: 20,
        participants: &["liam@mergington.edu"],
    },
    SeedActivity {
        name: "Math Olympiad",
        description: "Solve challenging problems and prepare for math competitions",
        schedule: "Tuesdays, 3:30 PM - 5:00 PM",
        max_participants: 16,
        participants: &["noah@mergington.edu", "charlotte@mergington.edu"],
    },
];

/// Activities the registry starts with, in display order.
pub fn seed_activities() -> IndexMap<String, Activity> {
    SEED_ACTIVITIES
        .iter()
        .map(|seed| {
            (
                seed.name.to_string(),
                Activity {
                    description: seed.description.to_string(),
                    schedule: seed.schedule.to_string(),
                    max_participants: seed.max_participants,
                    participants: seed.participants.iter().map(|p| p.to_string()).collect(),
                },
            )
        })
        .collect()
}
