use super::super::archetype::Tint;
use super::super::quiz::QuizQuestion;
use super::screen::{ChecklistRow, PermissionKind, ScreenContent, ScreenDescriptor};

/// Fixed flow denominator, sized for the worst case (longest question set
/// plus every optional screen). Compositions that skip optional screens keep
/// this total so the progress label never moves backwards.
pub const TOTAL_STEPS: usize = 18;

fn greeting_name(display_name: &str) -> String {
    let trimmed = display_name.trim();
    if trimmed.is_empty() {
        "there".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Numbers a list of screen contents contiguously from 1 against a fixed
/// denominator.
fn numbered(contents: Vec<ScreenContent>, total: usize) -> Vec<ScreenDescriptor> {
    contents
        .into_iter()
        .enumerate()
        .map(|(index, content)| ScreenDescriptor {
            position: index + 1,
            total,
            content,
        })
        .collect()
}

/// Composes the full onboarding sequence for the supplied question set.
///
/// Pure: the same inputs always yield the same sequence. Positions are
/// assigned by the assembler and are monotonic, unique, and gap-free whether
/// or not the optional screens are present.
pub fn compose(
    questions: &[QuizQuestion],
    needs_name_input: bool,
    display_name: &str,
) -> Vec<ScreenDescriptor> {
    let mut contents = Vec::with_capacity(TOTAL_STEPS);
    let name = greeting_name(display_name);

    contents.push(ScreenContent::Hero {
        image: "photo.artframe",
        title: "Meet Era",
        subtitle: "Your AI stylist for feed-worthy vibes.",
        cta: "Start your style journey",
    });

    if !display_name.trim().is_empty() {
        contents.push(ScreenContent::Welcome {
            name: display_name.trim().to_string(),
        });
    }

    contents.push(ScreenContent::ProblemStatement {
        title: "Your style deserves better",
        description: "Stop posting mediocre photos. Era helps you discover your authentic \
                      vibe and create content that actually gets noticed.",
        image: "camera.badge.ellipsis",
    });

    contents.push(ScreenContent::Benefits {
        title: "What Era unlocks for you",
        items: vec![
            ChecklistRow {
                icon: "sparkles",
                title: "Personalized vibe analysis",
                description: "AI discovers your unique style archetype",
            },
            ChecklistRow {
                icon: "camera",
                title: "Smart photo curation",
                description: "Automatically selects your best shots",
            },
            ChecklistRow {
                icon: "paintpalette",
                title: "Cohesive aesthetic system",
                description: "Color palettes and themes that work",
            },
            ChecklistRow {
                icon: "chart.line.uptrend.xyaxis",
                title: "Style evolution tracking",
                description: "See how your aesthetic develops over time",
            },
        ],
    });

    if needs_name_input {
        contents.push(ScreenContent::NameInput);
    }

    contents.push(ScreenContent::PopulationSelect);

    for question in questions {
        contents.push(ScreenContent::Question {
            question: question.clone(),
        });
    }

    contents.push(ScreenContent::PersonalizedPlan {
        name: name.clone(),
        days_count: 0,
    });
    contents.push(ScreenContent::ProgressTracking {
        title: "Track your style evolution",
        description: "Era monitors your aesthetic growth and helps you maintain consistency \
                      across all your content.",
    });
    contents.push(ScreenContent::HabitTracking {
        title: "Build better style habits",
        description: "Daily check-ins help you stay consistent with your aesthetic goals and \
                      identify what's working.",
    });
    contents.push(ScreenContent::DailyCheckin {
        title: "Stay motivated",
        description: "Your daily style check-in keeps you on track towards your aesthetic \
                      goals and helps you refine your personal brand.",
    });
    contents.push(ScreenContent::CustomPlan {
        name: name.clone(),
        plan_details: "Based on your answers, we've created a personalized style roadmap that \
                       evolves with your aesthetic journey.",
    });
    contents.push(ScreenContent::ProgressGraph {
        title: "Style Evolution",
        weeks: 4,
    });

    contents.push(ScreenContent::PermissionRequest {
        title: "Allow Era to access your photos?",
        description: "Era needs access to analyze your photos and create personalized style \
                      recommendations.",
        permission: PermissionKind::PhotoAccess,
    });

    contents.push(ScreenContent::ReadyToStart {
        name,
        cta: "Start my style journey",
    });

    numbered(contents, TOTAL_STEPS)
}

/// Compact three-screen sequence for users who already hold a stored profile.
pub fn compose_returning(display_name: &str) -> Vec<ScreenDescriptor> {
    let name = greeting_name(display_name);
    let contents = vec![
        ScreenContent::Welcome { name: name.clone() },
        ScreenContent::Summary {
            title: "Welcome back!",
            body: "Your style journey continues. Let's see what's new.",
            accent: Tint::Blue,
            cta: "Continue",
        },
        ScreenContent::ReadyToStart {
            name,
            cta: "Resume my journey",
        },
    ];
    let total = contents.len();
    numbered(contents, total)
}
