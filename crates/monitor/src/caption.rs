//! Natural-language captions for finalized events.

use crate::types::{Event, Severity};

/// Describe an event in one sentence.
///
/// Pure function of the event's person list, object summary, and severity.
/// Cases are checked in fixed precedence: weapon+danger, weapon+attention,
/// box, persons present, no one.
pub fn describe_event(event: &Event) -> String {
    let persons = &event.person_info;
    let first_friend = persons
        .iter()
        .find(|p| p.is_friend() && p.name.is_some())
        .and_then(|p| p.name.as_deref());
    let any_unknown = persons.iter().any(|p| !p.is_friend());

    if event.objects_summary.has_weapon {
        if event.severity == Severity::Danger {
            if any_unknown {
                return "An unknown person is at your door and appears to be holding a weapon. DANGER.".to_string();
            }
            if let Some(name) = first_friend {
                return format!(
                    "Your friend {name} has been marked as dangerous and is holding a weapon. DANGER."
                );
            }
            return "Someone holding a weapon is at your door. DANGER.".to_string();
        }
        if let Some(name) = first_friend {
            return format!("Your friend {name} is at your door holding a potential weapon.");
        }
        return "Someone familiar is holding a potential weapon at your door.".to_string();
    }

    if event.objects_summary.has_box {
        if let Some(name) = first_friend {
            return format!("Your friend {name} is delivering a package at your door.");
        }
        return "Someone is delivering a package at your door.".to_string();
    }

    if !persons.is_empty() {
        if let Some(name) = first_friend {
            return format!("Your friend {name} is standing at your door.");
        }
        return "An unknown person is standing at your door.".to_string();
    }

    "No one is at your door.".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EventType, ObjectsSummary};
    use chrono::Utc;
    use frames::PersonInfo;

    fn event(
        persons: Vec<PersonInfo>,
        has_box: bool,
        has_weapon: bool,
        severity: Severity,
    ) -> Event {
        let now = Utc::now();
        Event {
            event_id: 1,
            camera_id: "cam1".to_string(),
            event_type: EventType::Visitor,
            start_time: now,
            end_time: now,
            duration_sec: 0.0,
            objects_summary: ObjectsSummary {
                person_count: persons.len(),
                has_box,
                has_weapon,
            },
            person_info: persons,
            severity,
            snapshot_url: None,
            caption: String::new(),
        }
    }

    fn friend(name: &str) -> PersonInfo {
        PersonInfo {
            kind: Some("friend".to_string()),
            name: Some(name.to_string()),
        }
    }

    fn unknown() -> PersonInfo {
        PersonInfo {
            kind: Some("unknown".to_string()),
            name: None,
        }
    }

    #[test]
    fn danger_with_unknown_person() {
        let ev = event(vec![unknown()], false, true, Severity::Danger);
        assert_eq!(
            describe_event(&ev),
            "An unknown person is at your door and appears to be holding a weapon. DANGER."
        );
    }

    #[test]
    fn danger_with_blacklisted_friend_uses_first_friend_name() {
        let ev = event(
            vec![friend("Alice"), friend("Bob")],
            false,
            true,
            Severity::Danger,
        );
        assert_eq!(
            describe_event(&ev),
            "Your friend Alice has been marked as dangerous and is holding a weapon. DANGER."
        );
    }

    #[test]
    fn danger_with_no_persons() {
        let ev = event(Vec::new(), false, true, Severity::Danger);
        assert_eq!(
            describe_event(&ev),
            "Someone holding a weapon is at your door. DANGER."
        );
    }

    #[test]
    fn attention_with_friend() {
        let ev = event(vec![friend("Bob")], false, true, Severity::Attention);
        assert_eq!(
            describe_event(&ev),
            "Your friend Bob is at your door holding a potential weapon."
        );
    }

    #[test]
    fn attention_without_friend_name() {
        let ev = event(
            vec![PersonInfo {
                kind: Some("friend".to_string()),
                name: None,
            }],
            false,
            true,
            Severity::Attention,
        );
        assert_eq!(
            describe_event(&ev),
            "Someone familiar is holding a potential weapon at your door."
        );
    }

    #[test]
    fn delivery_cases() {
        let with_friend = event(vec![friend("Alice")], true, false, Severity::Normal);
        assert_eq!(
            describe_event(&with_friend),
            "Your friend Alice is delivering a package at your door."
        );

        let anonymous = event(vec![unknown()], true, false, Severity::Normal);
        assert_eq!(
            describe_event(&anonymous),
            "Someone is delivering a package at your door."
        );
    }

    #[test]
    fn visitor_cases() {
        let with_friend = event(vec![friend("Alice")], false, false, Severity::Normal);
        assert_eq!(
            describe_event(&with_friend),
            "Your friend Alice is standing at your door."
        );

        let stranger = event(vec![unknown()], false, false, Severity::Normal);
        assert_eq!(
            describe_event(&stranger),
            "An unknown person is standing at your door."
        );
    }

    #[test]
    fn empty_event_reports_no_one() {
        let ev = event(Vec::new(), false, false, Severity::Normal);
        assert_eq!(describe_event(&ev), "No one is at your door.");
    }

    #[test]
    fn weapon_takes_precedence_over_box_and_persons() {
        let ev = event(vec![friend("Alice")], true, true, Severity::Attention);
        assert_eq!(
            describe_event(&ev),
            "Your friend Alice is at your door holding a potential weapon."
        );
    }

    #[test]
    fn box_takes_precedence_over_plain_presence() {
        let ev = event(vec![unknown()], true, false, Severity::Normal);
        assert!(describe_event(&ev).contains("delivering a package"));
    }
}
