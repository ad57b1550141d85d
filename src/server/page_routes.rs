//! HTML page routes
//!
//! The festival pages are rendered straight from the typed event tree,
//! there is no template engine in between.

use crate::catalog::{Event, Rules};

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};

use super::state::{ServerState, SharedCatalog};

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn page_shell(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{} | CT FEST</title>\n\
         <link rel=\"stylesheet\" href=\"/static/css/style.css\">\n\
         </head>\n<body>\n{}\n</body>\n</html>\n",
        escape_html(title),
        body
    )
}

fn render_event_card(event: &Event) -> String {
    format!(
        "<article class=\"event-card\">\
         <h2><a href=\"/event/{}\">{}</a></h2>\
         <p>{}</p>\
         </article>",
        event.event_id,
        escape_html(&event.title),
        escape_html(&event.brief)
    )
}

fn render_listing(events: &[Event]) -> String {
    let cards: String = events.iter().map(render_event_card).collect();
    let body = format!(
        "<header><h1>CT FEST</h1><nav><a href=\"/\">Home</a> \
         <a href=\"/events\">Events</a> <a href=\"/about\">About</a> \
         <a href=\"/contact\">Contact</a></nav></header>\
         <main class=\"events\">{}</main>",
        if events.is_empty() {
            "<p>No events announced yet, check back soon.</p>".to_owned()
        } else {
            cards
        }
    );
    page_shell("Events", &body)
}

fn render_rules(rules: &Rules) -> String {
    match rules {
        Rules::Freeform(text) => format!("<p>{}</p>", escape_html(text)),
        Rules::Clauses(clauses) => {
            let items: String = clauses
                .iter()
                .map(|c| format!("<li>{}</li>", escape_html(c)))
                .collect();
            format!("<ol class=\"rules\">{}</ol>", items)
        }
    }
}

fn render_event_detail(event: &Event) -> String {
    let mut body = format!(
        "<main class=\"event-detail\"><h1>{}</h1><p class=\"brief\">{}</p>\
         <section class=\"description\"><p>{}</p></section>",
        escape_html(&event.title),
        escape_html(&event.brief),
        escape_html(&event.description)
    );

    if let Some(rules) = &event.rules {
        body.push_str("<section class=\"rules\"><h2>Rules</h2>");
        body.push_str(&render_rules(rules));
        body.push_str("</section>");
    }

    body.push_str("<section class=\"logistics\"><ul>");
    let team_size = event
        .team_size
        .as_ref()
        .map(|t| t.display())
        .unwrap_or_else(|| "Unlimited".to_owned());
    body.push_str(&format!(
        "<li>Team size: {}</li>",
        escape_html(&team_size)
    ));
    let capacity = event
        .max_participants
        .map(|n| n.to_string())
        .unwrap_or_else(|| "Unlimited".to_owned());
    body.push_str(&format!("<li>Max participants: {}</li>", capacity));
    body.push_str("</ul></section>");

    if let Some(form_link) = &event.form_link {
        body.push_str(&format!(
            "<a class=\"register\" href=\"{}\">Register</a>",
            escape_html(form_link)
        ));
    }

    body.push_str("</main>");
    page_shell(&event.title, &body)
}

fn render_not_found() -> String {
    page_shell(
        "Not Found",
        "<main class=\"not-found\"><h1>404</h1>\
         <p>This page does not exist.</p>\
         <a href=\"/\">Back to the festival</a></main>",
    )
}

fn not_found_page() -> Response {
    (StatusCode::NOT_FOUND, Html(render_not_found())).into_response()
}

async fn index(State(catalog): State<SharedCatalog>) -> Html<String> {
    Html(render_listing(&catalog.load()))
}

async fn event_detail(
    State(catalog): State<SharedCatalog>,
    id: Result<Path<i64>, PathRejection>,
) -> Response {
    let Ok(Path(id)) = id else {
        return not_found_page();
    };

    match catalog.find_by_id(id) {
        Some(event) => Html(render_event_detail(&event)).into_response(),
        None => not_found_page(),
    }
}

async fn about() -> Html<String> {
    Html(page_shell(
        "About",
        "<main class=\"about\"><h1>About CT FEST</h1>\
         <p>The annual tech festival: competitions, workshops and \
         tournaments across two days.</p></main>",
    ))
}

async fn contact() -> Html<String> {
    Html(page_shell(
        "Contact",
        "<main class=\"contact\"><h1>Contact</h1>\
         <p>Reach the organizers at <a href=\"mailto:team@ctfest.example\">\
         team@ctfest.example</a>.</p></main>",
    ))
}

async fn page_fallback() -> Response {
    not_found_page()
}

pub fn make_page_routes(state: ServerState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/events", get(index))
        .route("/event/{id}", get(event_detail))
        .route("/about", get(about))
        .route("/contact", get(contact))
        .fallback(page_fallback)
        .with_state(state)
}
