use crate::infra::{
    parse_population, InMemoryProfileStore, InMemoryResultPublisher, SeededNameSource,
};
use clap::Args;
use std::sync::Arc;
use vibe_quiz::error::AppError;
use vibe_quiz::onboarding::{
    compose, compose_returning, questions_for, OnboardingService, Population, QuestionSet,
    ScreenContent, ScreenDescriptor, TOTAL_STEPS,
};

#[derive(Args, Debug, Default)]
pub(crate) struct FlowReportArgs {
    /// Target population (male or female); omitted means the neutral set
    #[arg(long, value_parser = parse_population)]
    pub(crate) population: Option<Population>,
    /// Display name already known for the user
    #[arg(long)]
    pub(crate) name: Option<String>,
    /// Print the compact returning-user flow instead
    #[arg(long)]
    pub(crate) returning: bool,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Population to walk the quiz as
    #[arg(long, value_parser = parse_population, default_value = "female")]
    pub(crate) population: Population,
    /// Display name to seed the session with
    #[arg(long)]
    pub(crate) name: Option<String>,
    /// Comma-separated option indices, one per question (cycled when short)
    #[arg(long, default_value = "0,1,2,3")]
    pub(crate) choices: String,
}

fn content_label(content: &ScreenContent) -> String {
    match content {
        ScreenContent::Hero { title, .. } => format!("hero: {title}"),
        ScreenContent::Welcome { name } => format!("welcome: {name}"),
        ScreenContent::ProblemStatement { title, .. } => format!("problem: {title}"),
        ScreenContent::Benefits { title, items } => {
            format!("benefits: {title} ({} items)", items.len())
        }
        ScreenContent::NameInput => "name input".to_string(),
        ScreenContent::PopulationSelect => "population select".to_string(),
        ScreenContent::Question { question } => format!("question: {}", question.prompt),
        ScreenContent::PersonalizedPlan { name, .. } => format!("personalized plan: {name}"),
        ScreenContent::ProgressTracking { title, .. } => format!("progress tracking: {title}"),
        ScreenContent::HabitTracking { title, .. } => format!("habit tracking: {title}"),
        ScreenContent::DailyCheckin { title, .. } => format!("daily check-in: {title}"),
        ScreenContent::CustomPlan { name, .. } => format!("custom plan: {name}"),
        ScreenContent::ProgressGraph { title, weeks } => {
            format!("progress graph: {title} ({weeks} weeks)")
        }
        ScreenContent::PermissionRequest { permission, .. } => {
            format!("permission: {}", permission.label())
        }
        ScreenContent::Summary { title, .. } => format!("summary: {title}"),
        ScreenContent::ReadyToStart { name, .. } => format!("ready to start: {name}"),
    }
}

fn render_sequence(screens: &[ScreenDescriptor]) {
    for screen in screens {
        println!(
            "  {:>12}  [{}] {}",
            screen.progress_label(),
            screen.stage().label(),
            content_label(&screen.content)
        );
    }
}

pub(crate) fn run_flow_report(args: FlowReportArgs) -> Result<(), AppError> {
    let FlowReportArgs {
        population,
        name,
        returning,
    } = args;

    let display_name = name.unwrap_or_default();
    let screens = if returning {
        println!("Returning-user flow for '{display_name}':");
        compose_returning(&display_name)
    } else {
        let question_set = match population {
            Some(population) => QuestionSet::for_population(population),
            None => QuestionSet::VibeDiscovery,
        };
        let questions = questions_for(question_set);
        let screens = compose(&questions, display_name.trim().is_empty(), &display_name);
        println!(
            "Onboarding flow for {} ({} questions, {} of {} steps filled):",
            question_set.label(),
            questions.len(),
            screens.len(),
            TOTAL_STEPS
        );
        screens
    };

    render_sequence(&screens);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        population,
        name,
        choices,
    } = args;

    let choices: Vec<usize> = choices
        .split(',')
        .filter_map(|raw| raw.trim().parse().ok())
        .collect();

    let names = Arc::new(SeededNameSource::new(name.clone()));
    let store = Arc::new(InMemoryProfileStore::default());
    let publisher = Arc::new(InMemoryResultPublisher::default());
    let service = OnboardingService::new(names, store.clone(), publisher.clone());

    let view = service.start();
    let session_id = view.session_id.clone();
    println!("Started session {}", session_id.0);

    if view.needs_name_input {
        service.set_display_name(&session_id, "Era Explorer")?;
        println!("No stored name; entered 'Era Explorer'");
    }

    service.select_population(&session_id, population)?;
    println!("Selected population: {}", population.label());

    let questions = questions_for(QuestionSet::for_population(population));
    for (index, question) in questions.iter().enumerate() {
        let choice = choices
            .get(index % choices.len().max(1))
            .copied()
            .unwrap_or(0)
            .min(question.options.len() - 1);
        service.answer(&session_id, question.id.0, choice)?;
        println!(
            "  Q{}: {} -> {}",
            index + 1,
            question.prompt,
            question.options[choice].text
        );
    }

    let classification = service.finish(&session_id)?;
    println!();
    println!("{}", classification.summary);
    println!("  primary:   {}", classification.primary_title);
    if let Some(secondary) = classification.secondary_title {
        println!("  secondary: {secondary}");
    }
    println!("  analysis:  {}", classification.description);

    let report = service.report(&session_id)?;
    println!();
    println!(
        "Flow: {} screens composed against a denominator of {}",
        report.steps, report.total_steps
    );
    for entry in &report.stages {
        println!("  {:<12} {} screens", entry.stage_label, entry.screens);
    }

    println!();
    println!("Stored profiles: {}", store.profiles().len());
    println!("Published results: {}", publisher.events().len());

    Ok(())
}
