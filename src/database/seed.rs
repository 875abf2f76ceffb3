// Fixed roster the directory starts with on every boot.

use super::activities_repo::ActivityMap;
use crate::models::Activity;

struct SeedActivity {
    name: &'static str,
    activity_type: &'static str,
    description: &'static str,
    schedule: &'static str,
    max_participants: usize,
    participants: &'static [&'static str],
}

const SEED_ACTIVITIES: &[SeedActivity] = &[
    SeedActivity {
        name: "Basketball",
        activity_type: "Sports",
        description: "Practice drills and play in the school basketball league",
        schedule: "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        max_participants: 15,
        participants: &["james@mergington.edu", "lucas@mergington.edu"],
    },
    SeedActivity {
        name: "Tennis",
        activity_type: "Sports",
        description: "Improve your serve and compete in friendly matches",
        schedule: "Tuesdays and Thursdays, 4:00 PM - 5:00 PM",
        max_participants: 10,
        participants: &["ava@mergington.edu"],
    },
    SeedActivity {
        name: "Gym Class",
        activity_type: "Sports",
        description: "Physical education and sports activities",
        schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        max_participants: 30,
        participants: &["john@mergington.edu", "olivia@mergington.edu"],
    },
    SeedActivity {
        name: "Drama Club",
        activity_type: "Arts",
        description: "Rehearse scenes and stage the spring school play",
        schedule: "Wednesdays, 3:30 PM - 5:30 PM",
        max_participants: 20,
        participants: &["mia@mergington.edu", "ethan@mergington.edu"],
    },
    SeedActivity {
        name: "Art Studio",
        activity_type: "Arts",
        description: "Painting, drawing and sculpture in the open studio",
        schedule: "Thursdays, 3:30 PM - 5:00 PM",
        max_participants: 16,
        participants: &["isabella@mergington.edu"],
    },
    SeedActivity {
        name: "Chess Club",
        activity_type: "Academic",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 12,
        participants: &["michael@mergington.edu", "daniel@mergington.edu"],
    },
    SeedActivity {
        name: "Programming Class",
        activity_type: "Academic",
        description: "Learn programming fundamentals and build software projects",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        max_participants: 20,
        participants: &["emma@mergington.edu", "sophia@mergington.edu"],
    },
    SeedActivity {
        name: "Robotics Club",
        activity_type: "Academic",
        description: "Design, build and program robots for regional competitions",
        schedule: "Saturdays, 10:00 AM - 12:00 PM",
        max_participants: 12,
        participants: &["noah@mergington.edu"],
    },
    SeedActivity {
        name: "Math Olympiad",
        activity_type: "Academic",
        description: "Train for math competitions with challenging problem sets",
        schedule: "Mondays, 3:30 PM - 4:30 PM",
        max_participants: 10,
        participants: &["liam@mergington.edu", "amelia@mergington.edu"],
    },
];

pub fn seed_activities() -> ActivityMap {
    SEED_ACTIVITIES
        .iter()
        .map(|seed| {
            (
                seed.name.to_string(),
                Activity {
                    activity_type: seed.activity_type.to_string(),
                    description: seed.description.to_string(),
                    schedule: seed.schedule.to_string(),
                    max_participants: seed.max_participants,
                    participants: seed.participants.iter().map(|p| p.to_string()).collect(),
                },
            )
        })
        .collect()
}
