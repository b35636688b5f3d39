use serde::{Deserialize, Serialize};

use super::archetype::{Archetype, Population};
use super::quiz::{AnswerOption, QuestionId, QuizQuestion};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionSet {
    VibeDiscovery,
    MaleVibeDiscovery,
    FemaleVibeDiscovery,
}

impl QuestionSet {
    pub const fn ordered() -> [Self; 3] {
        [
            Self::VibeDiscovery,
            Self::MaleVibeDiscovery,
            Self::FemaleVibeDiscovery,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::VibeDiscovery => "Vibe Discovery",
            Self::MaleVibeDiscovery => "Male Vibe Discovery",
            Self::FemaleVibeDiscovery => "Female Vibe Discovery",
        }
    }

    pub const fn for_population(population: Population) -> Self {
        match population {
            Population::Male => Self::MaleVibeDiscovery,
            Population::Female => Self::FemaleVibeDiscovery,
        }
    }
}

/// Returns the same content for the same set on every call. Every set is
/// non-empty; question identities are unique across all sets.
pub fn questions_for(set: QuestionSet) -> Vec<QuizQuestion> {
    match set {
        QuestionSet::VibeDiscovery => vibe_discovery(),
        QuestionSet::MaleVibeDiscovery => male_vibe_discovery(),
        QuestionSet::FemaleVibeDiscovery => female_vibe_discovery(),
    }
}

fn vibe_discovery() -> Vec<QuizQuestion> {
    vec![
        QuizQuestion {
            id: QuestionId("vibe_intent"),
            prompt: "What are you here for right now?",
            options: vec![
                AnswerOption {
                    text: "Keep my vibe, fresh pics",
                    weights: vec![(Archetype::MainCharacter, 2), (Archetype::GlowGetter, 2)],
                },
                AnswerOption {
                    text: "Reinvent my look",
                    weights: vec![(Archetype::ChicRebel, 3), (Archetype::BoldVisionary, 1)],
                },
                AnswerOption {
                    text: "Explore new aesthetics",
                    weights: vec![(Archetype::AdventureSeeker, 2), (Archetype::DreamyMuse, 2)],
                },
                AnswerOption {
                    text: "Just for fun",
                    weights: vec![(Archetype::PlayfulSprite, 3), (Archetype::CozyChic, 1)],
                },
            ],
        },
        QuizQuestion {
            id: QuestionId("vibe_group_role"),
            prompt: "In a group you’re usually…",
            options: vec![
                AnswerOption {
                    text: "The photographer",
                    weights: vec![(Archetype::MainCharacter, 2), (Archetype::SocialButterfly, 1)],
                },
                AnswerOption {
                    text: "The cozy corner friend",
                    weights: vec![(Archetype::CozyChic, 2), (Archetype::SereneSoul, 2)],
                },
                AnswerOption {
                    text: "The party starter",
                    weights: vec![(Archetype::BoldVisionary, 2), (Archetype::PlayfulSprite, 1)],
                },
                AnswerOption {
                    text: "The plan maker",
                    weights: vec![(Archetype::AdventureSeeker, 2), (Archetype::GlowGetter, 1)],
                },
            ],
        },
        QuizQuestion {
            id: QuestionId("vibe_visual_pull"),
            prompt: "Pick a visual pull",
            options: vec![
                AnswerOption {
                    text: "Neutrals & light",
                    weights: vec![(Archetype::CozyChic, 2), (Archetype::SereneSoul, 2)],
                },
                AnswerOption {
                    text: "Neon & glitter",
                    weights: vec![(Archetype::BoldVisionary, 2), (Archetype::PlayfulSprite, 2)],
                },
                AnswerOption {
                    text: "Moody & shadowy",
                    weights: vec![(Archetype::MysteryIcon, 2), (Archetype::ChicRebel, 2)],
                },
                AnswerOption {
                    text: "Nature & horizons",
                    weights: vec![(Archetype::AdventureSeeker, 2), (Archetype::DreamyMuse, 1)],
                },
            ],
        },
        QuizQuestion {
            id: QuestionId("vibe_dump_story"),
            prompt: "What do you want your dumps to say?",
            options: vec![
                AnswerOption {
                    text: "I’m glowing & thriving",
                    weights: vec![(Archetype::GlowGetter, 3), (Archetype::MainCharacter, 1)],
                },
                AnswerOption {
                    text: "I’m mysterious — don’t decode me",
                    weights: vec![(Archetype::MysteryIcon, 3), (Archetype::ChicRebel, 1)],
                },
                AnswerOption {
                    text: "I’m the life of the party",
                    weights: vec![(Archetype::SocialButterfly, 2), (Archetype::BoldVisionary, 2)],
                },
                AnswerOption {
                    text: "I’m calm & grounded",
                    weights: vec![(Archetype::SereneSoul, 2), (Archetype::DreamyMuse, 1)],
                },
            ],
        },
    ]
}

fn male_vibe_discovery() -> Vec<QuizQuestion> {
    vec![
        QuizQuestion {
            id: QuestionId("male_goal"),
            prompt: "What's your main goal right now?",
            options: vec![
                AnswerOption {
                    text: "Level up my style game",
                    weights: vec![(Archetype::AlphaVibe, 2), (Archetype::CharismaticLeader, 2)],
                },
                AnswerOption {
                    text: "Find my authentic vibe",
                    weights: vec![(Archetype::StreetSage, 3), (Archetype::RuggedGentleman, 1)],
                },
                AnswerOption {
                    text: "Explore new aesthetics",
                    weights: vec![(Archetype::UrbanExplorer, 2), (Archetype::CreativeGenius, 2)],
                },
                AnswerOption {
                    text: "Keep it simple and clean",
                    weights: vec![(Archetype::MinimalistMaven, 3), (Archetype::ZenMaster, 1)],
                },
            ],
        },
        QuizQuestion {
            id: QuestionId("male_group_role"),
            prompt: "In a group setting, you're usually...",
            options: vec![
                AnswerOption {
                    text: "The natural leader",
                    weights: vec![(Archetype::AlphaVibe, 3), (Archetype::CharismaticLeader, 2)],
                },
                AnswerOption {
                    text: "The quiet observer",
                    weights: vec![(Archetype::StreetSage, 2), (Archetype::ZenMaster, 2)],
                },
                AnswerOption {
                    text: "The creative one",
                    weights: vec![(Archetype::CreativeGenius, 3), (Archetype::TechTitan, 1)],
                },
                AnswerOption {
                    text: "The social connector",
                    weights: vec![(Archetype::SocialMagnet, 2), (Archetype::UrbanExplorer, 1)],
                },
            ],
        },
        QuizQuestion {
            id: QuestionId("male_aesthetic"),
            prompt: "Pick your ideal aesthetic",
            options: vec![
                AnswerOption {
                    text: "Clean minimalism",
                    weights: vec![(Archetype::MinimalistMaven, 3), (Archetype::ZenMaster, 1)],
                },
                AnswerOption {
                    text: "Streetwear & urban",
                    weights: vec![(Archetype::StreetSage, 2), (Archetype::UrbanExplorer, 2)],
                },
                AnswerOption {
                    text: "Tech & innovation",
                    weights: vec![(Archetype::TechTitan, 3), (Archetype::CreativeGenius, 1)],
                },
                AnswerOption {
                    text: "Vintage & timeless",
                    weights: vec![(Archetype::VintageVibes, 2), (Archetype::RuggedGentleman, 2)],
                },
            ],
        },
        QuizQuestion {
            id: QuestionId("male_energy"),
            prompt: "What energy do you want to project?",
            options: vec![
                AnswerOption {
                    text: "Confident and commanding",
                    weights: vec![(Archetype::AlphaVibe, 3), (Archetype::CharismaticLeader, 1)],
                },
                AnswerOption {
                    text: "Mysterious and intriguing",
                    weights: vec![(Archetype::StreetSage, 2), (Archetype::RuggedGentleman, 2)],
                },
                AnswerOption {
                    text: "Creative and innovative",
                    weights: vec![(Archetype::CreativeGenius, 3), (Archetype::TechTitan, 1)],
                },
                AnswerOption {
                    text: "Calm and grounded",
                    weights: vec![(Archetype::ZenMaster, 2), (Archetype::MinimalistMaven, 1)],
                },
            ],
        },
        QuizQuestion {
            id: QuestionId("male_weekend"),
            prompt: "Your ideal weekend involves...",
            options: vec![
                AnswerOption {
                    text: "Leading a group adventure",
                    weights: vec![(Archetype::AlphaVibe, 2), (Archetype::CharismaticLeader, 2)],
                },
                AnswerOption {
                    text: "Exploring the city solo",
                    weights: vec![(Archetype::UrbanExplorer, 3), (Archetype::StreetSage, 1)],
                },
                AnswerOption {
                    text: "Creating something new",
                    weights: vec![(Archetype::CreativeGenius, 3), (Archetype::TechTitan, 1)],
                },
                AnswerOption {
                    text: "Chilling with close friends",
                    weights: vec![(Archetype::SocialMagnet, 2), (Archetype::ZenMaster, 1)],
                },
            ],
        },
    ]
}

fn female_vibe_discovery() -> Vec<QuizQuestion> {
    vec![
        QuizQuestion {
            id: QuestionId("female_intent"),
            prompt: "What are you here for right now?",
            options: vec![
                AnswerOption {
                    text: "Keep my vibe, fresh pics",
                    weights: vec![(Archetype::MainCharacter, 2), (Archetype::GlowGetter, 2)],
                },
                AnswerOption {
                    text: "Reinvent my look",
                    weights: vec![(Archetype::ChicRebel, 3), (Archetype::BoldVisionary, 1)],
                },
                AnswerOption {
                    text: "Explore new aesthetics",
                    weights: vec![(Archetype::AdventureSeeker, 2), (Archetype::DreamyMuse, 2)],
                },
                AnswerOption {
                    text: "Just for fun",
                    weights: vec![(Archetype::PlayfulSprite, 3), (Archetype::CozyChic, 1)],
                },
            ],
        },
        QuizQuestion {
            id: QuestionId("female_group_role"),
            prompt: "In a group you're usually…",
            options: vec![
                AnswerOption {
                    text: "The photographer",
                    weights: vec![(Archetype::MainCharacter, 2), (Archetype::SocialButterfly, 1)],
                },
                AnswerOption {
                    text: "The cozy corner friend",
                    weights: vec![(Archetype::CozyChic, 2), (Archetype::SereneSoul, 2)],
                },
                AnswerOption {
                    text: "The party starter",
                    weights: vec![(Archetype::BoldVisionary, 2), (Archetype::PlayfulSprite, 1)],
                },
                AnswerOption {
                    text: "The plan maker",
                    weights: vec![(Archetype::AdventureSeeker, 2), (Archetype::GlowGetter, 1)],
                },
            ],
        },
        QuizQuestion {
            id: QuestionId("female_visual_pull"),
            prompt: "Pick a visual pull",
            options: vec![
                AnswerOption {
                    text: "Neutrals & light",
                    weights: vec![(Archetype::CozyChic, 2), (Archetype::SereneSoul, 2)],
                },
                AnswerOption {
                    text: "Neon & glitter",
                    weights: vec![(Archetype::BoldVisionary, 2), (Archetype::PlayfulSprite, 2)],
                },
                AnswerOption {
                    text: "Moody & shadowy",
                    weights: vec![(Archetype::MysteryIcon, 2), (Archetype::ChicRebel, 2)],
                },
                AnswerOption {
                    text: "Nature & horizons",
                    weights: vec![(Archetype::AdventureSeeker, 2), (Archetype::DreamyMuse, 1)],
                },
            ],
        },
        QuizQuestion {
            id: QuestionId("female_dump_story"),
            prompt: "What do you want your dumps to say?",
            options: vec![
                AnswerOption {
                    text: "I'm glowing & thriving",
                    weights: vec![(Archetype::GlowGetter, 3), (Archetype::MainCharacter, 1)],
                },
                AnswerOption {
                    text: "I'm mysterious — don't decode me",
                    weights: vec![(Archetype::MysteryIcon, 3), (Archetype::ChicRebel, 1)],
                },
                AnswerOption {
                    text: "I'm the life of the party",
                    weights: vec![(Archetype::SocialButterfly, 2), (Archetype::BoldVisionary, 2)],
                },
                AnswerOption {
                    text: "I'm calm & grounded",
                    weights: vec![(Archetype::SereneSoul, 2), (Archetype::DreamyMuse, 1)],
                },
            ],
        },
    ]
}
