//! API Endpoints
//!
//! Method and path for every call the client makes.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::day::DayOfWeek;

/// Characters that must not appear raw inside one path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint<'a> {
    ListTasks,
    CreateTask,
    UpdateTask(&'a str),
    DeleteTask(&'a str),
    CurrentGoals,
    UpdateCurrentGoals,
    Dashboard,
    RecordActual(DayOfWeek, &'a str),
}

fn segment(raw: &str) -> String {
    utf8_percent_encode(raw, PATH_SEGMENT).to_string()
}

impl Endpoint<'_> {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::ListTasks | Endpoint::CurrentGoals | Endpoint::Dashboard => Method::Get,
            Endpoint::CreateTask => Method::Post,
            Endpoint::UpdateTask(_)
            | Endpoint::UpdateCurrentGoals
            | Endpoint::RecordActual(_, _) => Method::Put,
            Endpoint::DeleteTask(_) => Method::Delete,
        }
    }

    /// Path relative to the configured base URL
    pub fn path(&self) -> String {
        match self {
            Endpoint::ListTasks | Endpoint::CreateTask => "/tasks".to_string(),
            Endpoint::UpdateTask(id) | Endpoint::DeleteTask(id) => format!("/tasks/{}", segment(id)),
            Endpoint::CurrentGoals | Endpoint::UpdateCurrentGoals => "/weeks/current/goals".to_string(),
            Endpoint::Dashboard => "/dashboard".to_string(),
            Endpoint::RecordActual(day, task_id) => {
                format!("/weeks/current/records/{}/{}", day.as_str(), segment(task_id))
            }
        }
    }
}
