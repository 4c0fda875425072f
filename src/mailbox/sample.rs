//! Bootstrap scenario used when nothing is stored yet and on reset.

use crate::models::email::{
  folder::Folder,
  message::{Attachment, Contact, Message},
};
use chrono::{Duration, SecondsFormat, Utc};
use serde_json::Map;
use uuid::Uuid;

const ID_LEN: usize = 10;

/// Short opaque identifier. Random, not guaranteed globally unique.
pub fn new_id() -> String {
  let mut id = Uuid::new_v4().simple().to_string();
  id.truncate(ID_LEN);
  id
}

fn hours_ago(hours: i64) -> String {
  (Utc::now() - Duration::hours(hours)).to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn attachment(name: &str, size_kb: f64) -> Attachment {
  Attachment {
    name: name.to_string(),
    size_kb,
  }
}

/// The five sample messages (four in Inbox, one in Sent), each with a
/// freshly generated id and dates relative to now.
pub fn sample_messages() -> Vec<Message> {
  vec![
    Message {
      id: new_id(),
      subject: "Welcome to the Case Study: Southeast Stage Works".into(),
      from: Contact::new("Course Chair (Chien)", "chien@np.edu.sg"),
      to: vec![Contact::new("Student", "student@learn.sg")],
      cc: vec![],
      date: hours_ago(0),
      folder: Folder::Inbox,
      unread: true,
      starred: false,
      tags: vec!["Case Intro".into()],
      attachments: vec![],
      body: "<p>Hi team,<br/>\nWelcome to this simulated mailbox. Over the next two weeks, you\u{2019}ll receive staged emails that reveal details for the <strong>SSW</strong> financial management case. Start by reading everything in <em>Inbox</em> and use <strong>Import / Export</strong> to load the official scenario JSON.</p>".into(),
      extra: Map::new(),
    },
    Message {
      id: new_id(),
      subject: "Sponsorship Query: Budget Breakdown for Q4 Programme".into(),
      from: Contact::new("Wei Han (Artistic Director, SSW)", "weihan@ssw.sg"),
      to: vec![Contact::new("You", "student@learn.sg")],
      cc: vec![Contact::new("Finance", "finance@ssw.sg")],
      date: hours_ago(12),
      folder: Folder::Inbox,
      unread: true,
      starred: false,
      tags: vec!["Budget".into(), "Sponsorship".into()],
      attachments: vec![
        attachment("Q4_cost_items.xlsx", 128.0),
        attachment("Venue_quote.pdf", 412.0),
      ],
      body: "<p>Hi,<br/>\nWe\u{2019}re preparing a sponsorship approach for our Q4 programme at the Esplanade. Can you review the attached cost items and propose <strong>two funding mixes</strong>: (a) grant\u{2011}heavy, (b) revenue\u{2011}heavy?\n</p>\n<ul>\n<li>Target capacity: 220 seats</li>\n<li>Run: 8 shows</li>\n<li>Target paid occupancy: 65% baseline</li>\n<li>Student concession pricing requested</li>\n</ul>\n<p>We also need a <em>break\u{2011}even</em> estimate and 1 sensitivity scenario (\u{2013}15% ticket sales). Thanks!</p>".into(),
      extra: Map::new(),
    },
    Message {
      id: new_id(),
      subject: "Grant Window Clarification".into(),
      from: Contact::new("NAC Grants Officer", "grants@nac.gov.sg"),
      to: vec![Contact::new("SSW Team", "team@ssw.sg")],
      cc: vec![],
      date: hours_ago(36),
      folder: Folder::Inbox,
      unread: false,
      starred: false,
      tags: vec!["Grants".into()],
      attachments: vec![],
      body: "<p>Dear applicants,<br/>\nA reminder that the <strong>Presentation &amp; Participation</strong> grant call closes at <strong>5:00pm SGT, 28 Aug</strong>. Projects must commence <em>after</em> award. Please ensure marketing and community engagement lines are clearly costed.</p>".into(),
      extra: Map::new(),
    },
    Message {
      id: new_id(),
      subject: "RE: Sponsorship Query \u{2013} Budget Notes".into(),
      from: Contact::new("Finance (SSW)", "finance@ssw.sg"),
      to: vec![Contact::new("You", "student@learn.sg")],
      cc: vec![],
      date: hours_ago(40),
      folder: Folder::Inbox,
      unread: false,
      starred: false,
      tags: vec!["Budget".into()],
      attachments: vec![attachment("Cost-centres.csv", 56.0)],
      body: "<p>For quick reference:</p>\n<ul>\n<li>Venue hire per show includes tech labour.</li>\n<li>Marketing split: 60% digital, 40% on-ground.</li>\n<li>Merch margin ~35% after COGS.</li>\n</ul>".into(),
      extra: Map::new(),
    },
    Message {
      id: new_id(),
      subject: "Thanks for your email".into(),
      from: Contact::new("Student (You)", "student@learn.sg"),
      to: vec![Contact::new("Wei Han (SSW)", "weihan@ssw.sg")],
      cc: vec![],
      date: hours_ago(8),
      folder: Folder::Sent,
      unread: false,
      starred: false,
      tags: vec!["Follow-up".into()],
      attachments: vec![],
      body: "<p>Hi Wei Han,<br/>\nReceived. I\u{2019}ll revert with two funding mixes, a break\u{2011}even estimate, and a sensitivity run by tomorrow.</p>".into(),
      extra: Map::new(),
    },
  ]
}
