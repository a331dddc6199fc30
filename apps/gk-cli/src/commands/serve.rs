// serve.rs — `gk serve`: web dashboard over the goals file.
//
// Three routes: GET / renders the dashboard, POST /add and POST /update
// each run one load → mutate → save cycle and redirect back to / with a
// flash message in the query string. The store handle sits behind a
// mutex so mutating cycles never interleave.
//
// Handlers do their file I/O inline on the worker thread: the goals
// file is a few kilobytes and the mutex is never held across an await.

use std::sync::{Arc, Mutex};

use axum::extract::{Query, State};
use axum::response::{Html, Redirect};
use axum::routing::{get, post};
use axum::{Form, Router};
use chrono::Local;
use serde::Deserialize;

use gk_core::{service, Frequency, GoalCollection, PeriodStatus};
use gk_store::GoalStore;

struct AppState {
    store: Mutex<GoalStore>,
}

pub fn execute(store: GoalStore, addr: &str) -> anyhow::Result<()> {
    let addr: std::net::SocketAddr = addr.parse()?;
    let state = Arc::new(AppState {
        store: Mutex::new(store),
    });

    let app = Router::new()
        .route("/", get(index))
        .route("/add", post(add_goal))
        .route("/update", post(update_status))
        .with_state(state);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("goal dashboard listening on http://{addr}");
        axum::serve(listener, app).await?;
        Ok(())
    })
}

#[derive(Deserialize)]
struct FlashParams {
    msg: Option<String>,
}

#[derive(Deserialize)]
struct AddForm {
    name: String,
    frequency: String,
}

#[derive(Deserialize)]
struct UpdateForm {
    name: String,
    frequency: String,
    /// Omitted by hand-built requests; the dashboard buttons always send it.
    #[serde(default = "default_done")]
    done: String,
}

fn default_done() -> String {
    "true".to_string()
}

async fn index(State(state): State<Arc<AppState>>, Query(params): Query<FlashParams>) -> Html<String> {
    let store = state.store.lock().expect("store mutex poisoned");
    let page = match store.load() {
        Ok(collection) => render_dashboard(&collection, params.msg.as_deref()),
        Err(e) => render_error(&e.to_string()),
    };
    Html(page)
}

async fn add_goal(State(state): State<Arc<AppState>>, Form(form): Form<AddForm>) -> Redirect {
    let name = form.name.trim().to_string();
    let message = match parse_frequency(&form.frequency) {
        Ok(frequency) => {
            let store = state.store.lock().expect("store mutex poisoned");
            match try_add(&store, &name, frequency) {
                Ok(()) => format!("Added goal: {name} ({frequency})."),
                Err(e) => e,
            }
        }
        Err(e) => e,
    };
    redirect_with_flash(&message)
}

async fn update_status(State(state): State<Arc<AppState>>, Form(form): Form<UpdateForm>) -> Redirect {
    let done = matches!(form.done.to_lowercase().as_str(), "1" | "true" | "yes" | "on");
    let message = match parse_frequency(&form.frequency) {
        Ok(frequency) => {
            let store = state.store.lock().expect("store mutex poisoned");
            match try_update(&store, &form.name, frequency, done) {
                Ok(()) => format!(
                    "Marked '{}' as {}.",
                    form.name,
                    if done { "done" } else { "not done" }
                ),
                Err(e) => e,
            }
        }
        Err(e) => e,
    };
    redirect_with_flash(&message)
}

fn parse_frequency(raw: &str) -> Result<Frequency, String> {
    raw.parse::<Frequency>().map_err(|e| e.to_string())
}

fn try_add(store: &GoalStore, name: &str, frequency: Frequency) -> Result<(), String> {
    let mut collection = store.load().map_err(|e| e.to_string())?;
    collection.add(name, frequency).map_err(|e| e.to_string())?;
    store.save(&collection).map_err(|e| e.to_string())
}

fn try_update(
    store: &GoalStore,
    name: &str,
    frequency: Frequency,
    done: bool,
) -> Result<(), String> {
    let today = Local::now().date_naive();
    let mut collection = store.load().map_err(|e| e.to_string())?;
    service::set_goal_status(&mut collection, name, frequency, done, today)
        .map_err(|e| e.to_string())?;
    store.save(&collection).map_err(|e| e.to_string())
}

fn redirect_with_flash(message: &str) -> Redirect {
    Redirect::to(&flash_location(message))
}

fn flash_location(message: &str) -> String {
    format!("/?msg={}", urlencoding::encode(message))
}

fn render_dashboard(collection: &GoalCollection, flash: Option<&str>) -> String {
    let today = Local::now().date_naive();

    let mut html = String::from(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>Goalkeeper</title>\n",
    );
    html.push_str(css());
    html.push_str("</head>\n<body>\n<h1>Goalkeeper</h1>\n");

    if let Some(msg) = flash {
        html.push_str(&format!("<p class=\"flash\">{}</p>\n", escape_html(msg)));
    }

    if collection.is_empty() {
        html.push_str("<p>No goals yet. Add one below.</p>\n");
    }

    for frequency in Frequency::ALL {
        // Names sort case-insensitively within a group; groups keep the
        // canonical daily → yearly order.
        let mut goals: Vec<_> = collection.by_frequency(frequency).collect();
        if goals.is_empty() {
            continue;
        }
        goals.sort_by_key(|g| g.name.to_lowercase());

        html.push_str(&format!("<h2>{} goals</h2>\n<ul>\n", group_heading(frequency)));
        for goal in goals {
            let name = escape_html(&goal.name);
            html.push_str(&format!(
                "<li><span class=\"status\">{}</span> {name}\n\
                 <form class=\"inline\" method=\"post\" action=\"/update\">\n\
                 <input type=\"hidden\" name=\"name\" value=\"{name}\">\n\
                 <input type=\"hidden\" name=\"frequency\" value=\"{}\">\n\
                 <button name=\"done\" value=\"true\">Done</button>\n\
                 <button name=\"done\" value=\"false\">Not done</button>\n\
                 </form></li>\n",
                status_badge(goal.status_for(today)),
                frequency,
            ));
        }
        html.push_str("</ul>\n");
    }

    html.push_str(
        "<h2>Add a goal</h2>\n\
         <form method=\"post\" action=\"/add\">\n\
         <input type=\"text\" name=\"name\" placeholder=\"Goal name\">\n\
         <select name=\"frequency\">\n",
    );
    for frequency in Frequency::ALL {
        html.push_str(&format!(
            "<option value=\"{frequency}\">{}</option>\n",
            group_heading(frequency)
        ));
    }
    html.push_str(
        "</select>\n<button type=\"submit\">Add</button>\n</form>\n</body>\n</html>\n",
    );
    html
}

fn render_error(message: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>Goalkeeper</title>{}</head>\n\
         <body>\n<h1>Goalkeeper</h1>\n<p class=\"flash\">{}</p>\n</body>\n</html>\n",
        css(),
        escape_html(message)
    )
}

fn group_heading(frequency: Frequency) -> &'static str {
    match frequency {
        Frequency::Daily => "Daily",
        Frequency::Weekly => "Weekly",
        Frequency::Monthly => "Monthly",
        Frequency::Yearly => "Yearly",
    }
}

fn status_badge(status: PeriodStatus) -> &'static str {
    match status {
        PeriodStatus::Done => r#"<span class="done">✅ done</span>"#,
        PeriodStatus::NotDone => r#"<span class="not-done">❌ not done</span>"#,
        PeriodStatus::Unrecorded => r#"<span class="pending">⏳ pending</span>"#,
    }
}

fn css() -> &'static str {
    r#"
    <style>
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; max-width: 720px; margin: 0 auto; padding: 20px; line-height: 1.6; }
        h1, h2 { color: #333; }
        ul { list-style: none; padding: 0; }
        li { background: white; border: 1px solid #e5e7eb; border-radius: 8px; padding: 10px 16px; margin-bottom: 8px; }
        .flash { background: #fef3c7; color: #92400e; padding: 8px 12px; border-radius: 4px; }
        .status { margin-right: 8px; }
        .done { color: #065f46; }
        .not-done { color: #991b1b; }
        .pending { color: #92400e; }
        form.inline { display: inline; margin-left: 12px; }
        button { margin-left: 4px; }
    </style>
    "#
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
