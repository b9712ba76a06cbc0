//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{LastMessages, ScheduleMessage, SendMessage};
pub use response::{Account, Delivery, Message, Schedule, SchedulePayload, User};
pub use validation::ValidationError;
pub use value::{
    ApiHost, ApiPassword, Campaign, DeliveryId, Destinations, MessageText, PerPage, Username,
};

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};

    use super::*;

    fn dt(value: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M").unwrap()
    }

    #[test]
    fn send_message_carries_optional_campaign() {
        let request = SendMessage::new(
            Destinations::new("573002111111").unwrap(),
            MessageText::new("this is a test").unwrap(),
        );
        assert_eq!(request.to().as_str(), "573002111111");
        assert!(request.campaign().is_none());

        let request = request.with_campaign(Campaign::new("Campaign_1").unwrap());
        assert_eq!(request.campaign().unwrap().as_str(), "Campaign_1");
    }

    #[test]
    fn schedule_message_requires_a_date_by_construction() {
        let request = ScheduleMessage::new(
            Destinations::new("573002111111").unwrap(),
            MessageText::new("this is a test").unwrap(),
            dt("2014-02-18 10:00"),
        );
        assert_eq!(request.schedule_date(), dt("2014-02-18 10:00"));
        assert!(request.campaign().is_none());
    }

    #[test]
    fn last_messages_range_travels_as_a_pair() {
        let query = LastMessages::new(PerPage::new(5).unwrap());
        assert_eq!(query.per_page().value(), 5);
        assert!(query.range().is_none());

        let start = NaiveDate::from_ymd_opt(2013, 7, 23).unwrap();
        let end = NaiveDate::from_ymd_opt(2013, 7, 24).unwrap();
        let query = query.between(start, end);
        assert_eq!(query.range(), Some((start, end)));
    }

    #[test]
    fn schedule_payload_reports_file_branch() {
        let schedule = Schedule {
            id: 32,
            user_id: Some(45),
            scheduled_at: dt("2014-05-23 10:23"),
            created_at: dt("2012-09-23 22:00"),
            status: "scheduled".to_owned(),
            payload: SchedulePayload::File {
                file_name: "test.xls".to_owned(),
                file_has_text: false,
                text: Some("this is a test".to_owned()),
            },
        };
        assert!(schedule.is_file());

        let schedule = Schedule {
            payload: SchedulePayload::Text {
                destinations: "573002111111".to_owned(),
                text: "this is a test".to_owned(),
            },
            ..schedule
        };
        assert!(!schedule.is_file());
    }

    #[test]
    fn entities_compare_structurally() {
        let user = User {
            id: 1,
            name: "Usuario 1".to_owned(),
            email: "usuario1@tudominio.com".to_owned(),
            status: "active".to_owned(),
        };
        assert_eq!(user, user.clone());
    }
}
