use anyhow::Result;
use clap::Parser;
use screen_core::{Notifier, RecordingNotifier, Severity, TracingNotifier, UsersScreen};
use shared::{Role, UserDraft, UserId};
use store::UserStore;

#[derive(Parser, Debug)]
struct Args {
    /// Emit each page view as JSON instead of a plain table.
    #[arg(long)]
    json: bool,
}

fn print_page(screen: &UsersScreen<RecordingNotifier>, json: bool) -> Result<()> {
    let view = screen.page();
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }
    println!(
        "-- page {}/{} ({} users total) --",
        view.page, view.total_pages, view.total_count
    );
    for record in view.items {
        println!(
            "  #{:<3} {:<22} {:<28} {}",
            record.id.0,
            record.name,
            record.email,
            record.role.label()
        );
    }
    Ok(())
}

/// Echo buffered notifications to stdout and mirror them into the log stream.
fn drain_notifications(screen: &mut UsersScreen<RecordingNotifier>, log: &mut TracingNotifier) {
    for (message, severity) in screen.notifier_mut().drain() {
        let tag = match severity {
            Severity::Success => "ok",
            Severity::Error => "error",
        };
        println!("  [{tag}] {message}");
        log.notify(&message, severity);
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let mut screen = UsersScreen::new(UserStore::seeded(), RecordingNotifier::new());
    let mut log = TracingNotifier;

    println!("== stock roster ==");
    print_page(&screen, args.json)?;

    println!("== create: draft fails validation, then passes ==");
    screen.open_create();
    // An unknown wire string leaves the role unselected.
    screen.save(&UserDraft::new("Al", "not-an-email", Role::parse("superuser")))?;
    let errors = screen.errors();
    for field_error in [&errors.name, &errors.email, &errors.role]
        .into_iter()
        .flatten()
    {
        println!("  [invalid] {field_error}");
    }
    screen.save(&UserDraft::new(
        "Elena Torres",
        "elena@example.com",
        Some(Role::Moderator),
    ))?;
    drain_notifications(&mut screen, &mut log);

    println!("== edit: rename user 2 ==");
    screen.open_edit(UserId(2))?;
    let mut draft = screen
        .form_dialog()
        .bound()
        .map(UserDraft::from_record)
        .unwrap_or_default();
    draft.name = "María García-López".to_string();
    draft.role = Some(Role::Admin);
    screen.save(&draft)?;
    drain_notifications(&mut screen, &mut log);

    println!("== page 2 ==");
    screen.set_page(2);
    print_page(&screen, args.json)?;

    println!("== delete page 2 down to nothing; cursor steps back ==");
    for id in [8, 7, 6] {
        screen.request_delete(UserId(id))?;
        screen.confirm_delete()?;
        drain_notifications(&mut screen, &mut log);
    }
    println!("now viewing page {}", screen.current_page());
    print_page(&screen, args.json)?;

    Ok(())
}
