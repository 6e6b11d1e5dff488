//! HTML pages for the registration form and the schedule.
//!
//! Pages are small enough to build with `format!`; every user-supplied value
//! goes through [`escape`] first.

use std::fmt::Write as _;

use clinic_core::appointment::ScheduleEntry;
use quick_xml::escape::escape;

use crate::handlers::register::RegistrationForm;

const STYLE: &str = "
body  { font-family: sans-serif; margin: 2rem auto; max-width: 48rem; }
nav a { margin-right: 1rem; }
label { display: block; margin-top: 0.75rem; }
input { width: 100%; padding: 0.4rem; }
table { border-collapse: collapse; width: 100%; }
th, td { border: 1px solid #ccc; padding: 0.4rem 0.6rem; text-align: left; }
.error { color: #a00; }
";

/// Display format for appointment times on the schedule page.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

fn layout(title: &str, body: &str) -> String {
  format!(
    "<!DOCTYPE html>
<html lang=\"en\">
<head>
<meta charset=\"utf-8\">
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body>
<nav><a href=\"/\">Register a patient</a><a href=\"/schedule\">Schedule</a></nav>
{body}
</body>
</html>
",
    title = escape(title),
  )
}

/// The registration form, optionally pre-filled and with an error message.
pub fn register_page(form: &RegistrationForm, error: Option<&str>) -> String {
  let mut body = String::from("<h1>Register a patient</h1>\n");
  if let Some(message) = error {
    let _ = writeln!(body, "<p class=\"error\">{}</p>", escape(message));
  }

  let _ = write!(
    body,
    "<form method=\"post\" action=\"/\">
<label>Name <input name=\"name\" value=\"{name}\" required></label>
<label>Phone <input name=\"phone\" value=\"{phone}\" required></label>
<label>Address <input name=\"address\" value=\"{address}\" required></label>
<p><button type=\"submit\">Register</button></p>
</form>
",
    name = escape(form.name.as_str()),
    phone = escape(form.phone.as_str()),
    address = escape(form.address.as_str()),
  );

  layout("Register a patient", &body)
}

/// Every booked appointment, in the order the store returns them.
pub fn schedule_page(entries: &[ScheduleEntry]) -> String {
  let mut body = String::from("<h1>Appointments</h1>\n");

  if entries.is_empty() {
    body.push_str("<p>No appointments booked yet.</p>\n");
    return layout("Appointments", &body);
  }

  body.push_str(
    "<table>\n<thead><tr><th>Matricule</th><th>Patient</th><th>Time</th></tr></thead>\n<tbody>\n",
  );
  for entry in entries {
    let _ = writeln!(
      body,
      "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
      entry.patient.matricule,
      escape(entry.patient.name.as_str()),
      entry.appointment.appointment_time.format(TIME_FORMAT),
    );
  }
  body.push_str("</tbody>\n</table>\n");

  layout("Appointments", &body)
}

/// A plain page carrying one message.
pub fn error_page(title: &str, message: &str) -> String {
  let body = format!("<h1>{}</h1>\n<p>{}</p>\n", escape(title), escape(message));
  layout(title, &body)
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;
  use clinic_core::{
    appointment::Appointment,
    patient::{Matricule, Patient},
  };

  use super::*;

  fn entry(name: &str) -> ScheduleEntry {
    ScheduleEntry {
      appointment: Appointment {
        id:               1,
        patient_id:       1,
        appointment_time: NaiveDate::from_ymd_opt(2024, 1, 1)
          .unwrap()
          .and_hms_opt(10, 0, 0)
          .unwrap(),
      },
      patient:     Patient {
        id:        1,
        name:      name.into(),
        phone:     "555".into(),
        address:   "Main St".into(),
        matricule: Matricule::FIRST,
      },
    }
  }

  #[test]
  fn schedule_row_shows_matricule_name_and_time() {
    let html = schedule_page(&[entry("Alice")]);
    assert!(html.contains("<td>PAT-0001</td>"), "{html}");
    assert!(html.contains("<td>Alice</td>"), "{html}");
    assert!(html.contains("<td>2024-01-01 10:00</td>"), "{html}");
  }

  #[test]
  fn empty_schedule_says_so() {
    let html = schedule_page(&[]);
    assert!(html.contains("No appointments booked yet."));
    assert!(!html.contains("<table>"));
  }

  #[test]
  fn patient_text_is_escaped() {
    let html = schedule_page(&[entry("<script>alert(1)</script>")]);
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
  }

  #[test]
  fn form_is_refilled_and_shows_error() {
    let form = RegistrationForm {
      name:    "Bob \"the\" Builder".into(),
      phone:   String::new(),
      address: "Yard".into(),
    };
    let html = register_page(&form, Some("Phone is required."));
    assert!(html.contains("class=\"error\">Phone is required."));
    assert!(html.contains("value=\"Bob &quot;the&quot; Builder\""), "{html}");
    assert!(html.contains("value=\"Yard\""));
  }
}
