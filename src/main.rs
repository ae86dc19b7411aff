// Campus Events console shell
// Main entry point

use std::env;
use std::sync::mpsc;
use std::time::Duration;

use anyhow::{bail, Result};
use chrono::{Local, NaiveDateTime};

use campus_events::models::event::Event;
use campus_events::models::locale::{strings, Locale};
use campus_events::models::settings::PortalSettings;
use campus_events::services::catalog::{PortalCatalog, StaticCatalog};
use campus_events::services::countdown::{evaluate, CountdownState, CountdownTicker};
use campus_events::services::gallery::{self, YearFilter};
use campus_events::services::pipeline::{CategoryFilter, EventViews, SortKey};
use campus_events::services::registration::{registration_status, spots_left, RegistrationStatus};
use campus_events::services::settings;

enum Page {
    Events,
    Gallery,
    Contacts,
}

struct Options {
    locale: Option<Locale>,
    filter: CategoryFilter,
    sort: SortKey,
    year: YearFilter,
    page: Page,
    json: bool,
    watch: bool,
}

fn parse_args() -> Result<Options> {
    let mut options = Options {
        locale: None,
        filter: CategoryFilter::All,
        sort: SortKey::DateAsc,
        year: YearFilter::All,
        page: Page::Events,
        json: false,
        watch: false,
    };

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--locale" => {
                let value = args.next().unwrap_or_default();
                match Locale::parse(&value) {
                    Some(locale) => options.locale = Some(locale),
                    None => bail!("unknown locale '{value}' (expected en or vi)"),
                }
            }
            "--category" => {
                let value = args.next().unwrap_or_default();
                match CategoryFilter::parse(&value) {
                    Some(filter) => options.filter = filter,
                    None => bail!("unknown category '{value}' (expected all, academic, cultural or sports)"),
                }
            }
            "--sort" => {
                let value = args.next().unwrap_or_default();
                match SortKey::parse(&value) {
                    Some(sort) => options.sort = sort,
                    None => bail!("unknown sort '{value}' (expected date, date-desc, name or category)"),
                }
            }
            "--year" => {
                options.year = YearFilter::parse(&args.next().unwrap_or_default());
            }
            "--gallery" => options.page = Page::Gallery,
            "--contacts" => options.page = Page::Contacts,
            "--json" => options.json = true,
            "--watch" => options.watch = true,
            other => bail!("unknown argument '{other}'"),
        }
    }

    Ok(options)
}

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Starting Campus Events portal");

    let options = parse_args()?;

    let portal_settings = settings::load().unwrap_or_else(|err| {
        log::warn!("settings unavailable ({err}); using defaults");
        PortalSettings::default()
    });
    let locale = options.locale.unwrap_or(portal_settings.locale);

    let catalog = StaticCatalog::new();
    match options.page {
        Page::Gallery => return render_gallery(&catalog, &options, locale),
        Page::Contacts => return render_contacts(&catalog, locale),
        Page::Events => {}
    }

    let events = catalog.events(locale);
    let now = Local::now().naive_local();
    let views = EventViews::build(&events, options.filter, options.sort, now.date());

    if options.json {
        println!("{}", serde_json::to_string_pretty(&views)?);
        return Ok(());
    }

    render_views(&views, locale, now);

    if options.watch {
        watch(&views.upcoming, locale, portal_settings.tick_interval_secs)?;
    }

    Ok(())
}

fn render_gallery(catalog: &StaticCatalog, options: &Options, locale: Locale) -> Result<()> {
    let images = catalog.gallery(locale);
    let filtered = gallery::filter_images(&images, &options.year, options.filter);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&filtered)?);
        return Ok(());
    }

    println!("== {} ==", gallery::years(&images).join(", "));
    for image in &filtered {
        println!(
            "  - {} [{}] {} | {}",
            image.title,
            image.category.label(locale),
            image.year,
            image.description,
        );
    }
    Ok(())
}

fn render_contacts(catalog: &StaticCatalog, locale: Locale) -> Result<()> {
    let university = catalog.university(locale);
    println!("{}", university.name);
    println!("{} | {} | {}", university.address, university.phone, university.email);
    println!();
    for member in catalog.staff(locale) {
        println!("  - {}, {} ({})", member.name, member.title, member.department);
        println!("    {} | {}", member.phone, member.email);
    }
    Ok(())
}

fn render_views(views: &EventViews, locale: Locale, now: NaiveDateTime) {
    println!(
        "== {} ({}) ==",
        strings::UPCOMING_TAB.get(locale),
        views.upcoming.len()
    );
    if views.upcoming.is_empty() {
        println!("{}", strings::NO_UPCOMING_EVENTS.get(locale));
    }
    for event in &views.upcoming {
        render_event(event, locale);
        println!("    {}", countdown_line(event, locale, now));
    }

    println!();
    println!(
        "== {} ({}) ==",
        strings::PAST_TAB.get(locale),
        views.past.len()
    );
    if views.past.is_empty() {
        println!("{}", strings::NO_PAST_EVENTS.get(locale));
    }
    for event in &views.past {
        render_event(event, locale);
    }

    println!();
    println!("{}: {}", strings::TOTAL_EVENTS.get(locale), views.total());
}

fn render_event(event: &Event, locale: Locale) {
    println!(
        "  - {} [{}] {} {} | {}",
        event.title,
        event.category.label(locale),
        event.date,
        event.time,
        event.location,
    );
    if event.accepts_registrations() {
        let status = registration_status(event, Local::now().date_naive());
        let spots = spots_left(event).unwrap_or(0);
        let status = match status {
            RegistrationStatus::Open => format!("open, {spots} spots left"),
            RegistrationStatus::Closed => "closed".to_string(),
            RegistrationStatus::Full => "full".to_string(),
        };
        println!("    registration: {status}");
    }
}

fn countdown_line(event: &Event, locale: Locale, now: NaiveDateTime) -> String {
    format_state(evaluate(event.start_instant(), now), locale)
}

fn format_state(state: CountdownState, locale: Locale) -> String {
    match state {
        CountdownState::Expired => strings::EVENT_STARTED.get(locale).to_string(),
        CountdownState::Counting(remaining) => {
            let cells: Vec<String> = remaining
                .segments()
                .iter()
                .map(|segment| format!("{} {}", segment.value, segment.label(locale)))
                .collect();
            format!("{} {}", strings::STARTS_IN.get(locale), cells.join(" "))
        }
    }
}

/// Keep one live ticker per upcoming event and print every update until
/// interrupted.
fn watch(upcoming: &[Event], locale: Locale, tick_interval_secs: u64) -> Result<()> {
    if upcoming.is_empty() {
        return Ok(());
    }

    let interval = Duration::from_secs(tick_interval_secs.max(1));
    let (tx, rx) = mpsc::channel();
    let mut tickers = Vec::with_capacity(upcoming.len());

    for (index, event) in upcoming.iter().enumerate() {
        let tx = tx.clone();
        let ticker =
            CountdownTicker::spawn_with_interval(&event.date, &event.time, interval, move |state| {
                let _ = tx.send((index, state));
            })?;
        tickers.push(ticker);
    }
    drop(tx);

    println!();
    for (index, state) in rx {
        println!("{}: {}", upcoming[index].title, format_state(state, locale));
    }

    Ok(())
}
