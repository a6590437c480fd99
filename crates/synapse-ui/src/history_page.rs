//! History page rendering.

use std::fmt::{self, Write};

use chrono::{DateTime, TimeZone};

use synapse_core::time::{format_relative_time, TimeStyle};
use synapse_core::types::{ConversationRecord, WindowFilter};
use synapse_history::{HistoryListing, HistoryViewState};

use crate::html::{document, escape};

/// Render the history page for `state`, showing `listing`.
///
/// Each card shows at most `tags_shown` tags.
pub fn render_history_page<Tz>(
    state: &HistoryViewState,
    listing: &HistoryListing,
    now: &DateTime<Tz>,
    tags_shown: usize,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut body = String::new();

    body.push_str(
        "<header class=\"page-header\"><div class=\"inner\">\
         <a href=\"/\"><strong>Synapse AI</strong></a>\
         <a class=\"btn\" href=\"/chat\">+ New Chat</a></div></header>\n",
    );
    body.push_str(
        "<main class=\"history\">\n<h1>Chat History</h1>\n\
         <p class=\"lead\">Browse and manage your conversation history</p>\n",
    );

    render_controls(&mut body, state);
    let _ = writeln!(
        body,
        "<p class=\"results-count\">{}</p>",
        escape(&listing.summary())
    );

    match listing.empty_state() {
        Some(empty) => {
            let _ = writeln!(
                body,
                "<div class=\"empty\"><h3>{}</h3><p>{}</p>\
                 <a class=\"btn\" href=\"/chat\">Start Your First Chat</a></div>",
                escape(empty.title),
                escape(empty.hint)
            );
        }
        None => {
            body.push_str("<div class=\"cards\">\n");
            for record in &listing.results {
                render_card(&mut body, record, now, tags_shown);
            }
            body.push_str("</div>\n");
        }
    }

    if listing.show_manage_panel() {
        body.push_str(
            "<section class=\"manage\"><div><h3>Manage Your Conversations</h3>\
             <p>Export, organize, or delete your chat history</p></div>\
             <div><button class=\"btn outline\" type=\"button\">Export All</button> \
             <button class=\"btn\" type=\"button\">Organize</button></div></section>\n",
        );
    }

    body.push_str("</main>\n");
    document("Synapse AI - History", &body)
}

fn render_controls(out: &mut String, state: &HistoryViewState) {
    let _ = writeln!(
        out,
        "<form class=\"controls\" method=\"get\" action=\"/history\">\
         <input type=\"text\" name=\"q\" value=\"{}\" placeholder=\"Search conversations, topics, or tags...\">\
         <input type=\"hidden\" name=\"filter\" value=\"{}\">",
        escape(&state.query),
        state.filter
    );
    out.push_str("<nav class=\"filters\">");
    for filter in WindowFilter::ALL {
        let class = if filter == state.filter {
            "btn"
        } else {
            "btn outline"
        };
        let _ = write!(
            out,
            "<a class=\"{}\" href=\"/history?q={}&amp;filter={}\">{}</a>",
            class,
            urlencoding::encode(&state.query),
            filter,
            filter
        );
    }
    out.push_str("</nav></form>\n");
}

fn render_card<Tz>(out: &mut String, record: &ConversationRecord, now: &DateTime<Tz>, tags_shown: usize)
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let _ = write!(
        out,
        "<a class=\"card\" href=\"/chat?id={}\"><span class=\"count\">{} messages</span>\
         <h3>{}</h3><p>{}</p><div class=\"tags\">",
        urlencoding::encode(&record.id),
        record.message_count,
        escape(&record.title),
        escape(&record.preview)
    );
    for tag in record.tags.iter().take(tags_shown) {
        let _ = write!(out, "<span>{}</span>", escape(tag));
    }
    let _ = writeln!(
        out,
        "</div><footer><span>{}</span><span>Continue &rarr;</span></footer></a>",
        format_relative_time(&record.timestamp, now, TimeStyle::History)
    );
}
