//! Chat page rendering.
//!
//! The page is rendered once per load from a session snapshot. After that
//! the embedded script re-fetches only the transcript fragment, rendered by
//! [`render_transcript`], while a reply is pending.

use std::fmt::{self, Write};

use chrono::{DateTime, TimeZone};

use synapse_chat::{SessionSnapshot, SUGGESTED_PROMPTS};
use synapse_core::time::{format_relative_time, TimeStyle};
use synapse_core::types::ConversationRecord;

use crate::html::{document, escape};

/// Client-side glue for sending messages, polling the transcript and
/// searching the sidebar.
pub const CHAT_JS: &str = include_str!("../assets/chat.js");

/// Render the full chat page.
///
/// `sidebar` is the conversation list already filtered by the session's
/// sidebar query; `active_id` is the deep-linked conversation, if any,
/// highlighted in the sidebar.
pub fn render_chat_page<Tz>(
    session: &SessionSnapshot,
    sidebar: &[ConversationRecord],
    active_id: Option<&str>,
    now: &DateTime<Tz>,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut body = String::new();
    let layout_class = if session.sidebar_open {
        "chat-layout"
    } else {
        "chat-layout sidebar-closed"
    };
    let _ = writeln!(
        body,
        "<div id=\"chat\" class=\"{}\" data-session=\"{}\" data-active=\"{}\">",
        layout_class,
        session.id,
        escape(active_id.unwrap_or_default())
    );

    render_sidebar(&mut body, &session.sidebar_query, sidebar, active_id, now);

    body.push_str("<div class=\"chat-main\">\n");
    body.push_str(
        "<div class=\"chat-header\">\
         <button class=\"menu-toggle\" data-action=\"toggle-sidebar\" aria-label=\"Open sidebar\">&#9776;</button>\
         <h2>AI Assistant</h2></div>\n",
    );
    let _ = writeln!(
        body,
        "<div id=\"transcript\" class=\"messages\">{}</div>",
        render_transcript(session, now)
    );
    body.push_str(
        "<div class=\"composer\">\
         <form id=\"composer\">\
         <input id=\"composer-input\" type=\"text\" placeholder=\"Type your message...\" autocomplete=\"off\">\
         <button id=\"composer-send\" class=\"btn\" type=\"submit\" disabled>Send</button>\
         </form>\
         <small>AI can make mistakes. Check important information.</small>\
         </div>\n",
    );
    body.push_str("</div>\n</div>\n");
    let _ = writeln!(body, "<script>\n{}</script>", CHAT_JS);

    document("Synapse AI - Chat", &body)
}

/// Render the message list, the empty-state prompts and the typing indicator.
pub fn render_transcript<Tz>(session: &SessionSnapshot, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut out = String::new();

    if session.messages.is_empty() {
        out.push_str(
            "<div class=\"empty-chat\"><h3>Start a conversation</h3>\
             <p>Ask me anything! I'm here to help with writing, coding, learning, and more.</p>\
             <div class=\"prompts\">",
        );
        for prompt in SUGGESTED_PROMPTS {
            let _ = write!(
                out,
                "<button type=\"button\" data-prompt=\"{0}\">{0}</button>",
                escape(prompt)
            );
        }
        out.push_str("</div></div>");
    }

    for message in &session.messages {
        let _ = write!(
            out,
            "<div class=\"message {}\" data-id=\"{}\"><p>{}</p><div class=\"time\">{}</div></div>",
            message.role.as_str(),
            escape(&message.id),
            escape(&message.content),
            format_relative_time(&message.timestamp, now, TimeStyle::Chat)
        );
    }

    if session.is_typing {
        out.push_str("<div class=\"typing\"><span></span><span></span><span></span></div>");
    }

    out
}

/// Render the sidebar's conversation links.
///
/// The page script swaps this fragment in after each sidebar search.
pub fn render_sidebar_list<Tz>(
    sidebar: &[ConversationRecord],
    active_id: Option<&str>,
    now: &DateTime<Tz>,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut out = String::new();
    for conv in sidebar {
        let active = if active_id == Some(conv.id.as_str()) {
            " active"
        } else {
            ""
        };
        let _ = writeln!(
            out,
            "<a class=\"sidebar-item{}\" href=\"/chat?id={}\"><h4>{}</h4><p>{}</p><p class=\"time\">{}</p></a>",
            active,
            urlencoding::encode(&conv.id),
            escape(&conv.title),
            escape(&conv.preview),
            format_relative_time(&conv.timestamp, now, TimeStyle::Chat)
        );
    }
    out
}

fn render_sidebar<Tz>(
    out: &mut String,
    query: &str,
    sidebar: &[ConversationRecord],
    active_id: Option<&str>,
    now: &DateTime<Tz>,
) where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    out.push_str("<aside class=\"sidebar\">\n<div class=\"sidebar-header\">");
    out.push_str(
        "<div class=\"sidebar-brand\"><span>Synapse AI</span>\
         <button class=\"menu-toggle-close\" data-action=\"toggle-sidebar\" aria-label=\"Close sidebar\">&times;</button></div>",
    );
    out.push_str("<button class=\"btn\" data-action=\"new-chat\">+ New Chat</button></div>\n");

    let _ = writeln!(
        out,
        "<form id=\"sidebar-search\" class=\"sidebar-search\">\
         <input id=\"sidebar-search-input\" type=\"text\" name=\"q\" value=\"{}\" placeholder=\"Search conversations...\"></form>",
        escape(query)
    );

    let _ = writeln!(
        out,
        "<div id=\"sidebar-list\" class=\"sidebar-list\">\n{}</div>",
        render_sidebar_list(sidebar, active_id, now)
    );

    out.push_str(
        "<div class=\"sidebar-profile\">User<small>Free Plan</small> \
         <a href=\"/history\">History</a></div>\n</aside>\n",
    );
}
