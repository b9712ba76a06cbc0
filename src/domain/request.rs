use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::value::{Campaign, Destinations, MessageText, PerPage};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Immediate send of an SMS message to one or more destinations.
pub struct SendMessage {
    to: Destinations,
    text: MessageText,
    campaign: Option<Campaign>,
}

impl SendMessage {
    pub fn new(to: Destinations, text: MessageText) -> Self {
        Self {
            to,
            text,
            campaign: None,
        }
    }

    /// Tag the send with a campaign.
    pub fn with_campaign(mut self, campaign: Campaign) -> Self {
        self.campaign = Some(campaign);
        self
    }

    pub fn to(&self) -> &Destinations {
        &self.to
    }

    pub fn text(&self) -> &MessageText {
        &self.text
    }

    pub fn campaign(&self) -> Option<&Campaign> {
        self.campaign.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Deferred send, executed by the server at `schedule_date`.
pub struct ScheduleMessage {
    to: Destinations,
    text: MessageText,
    schedule_date: NaiveDateTime,
    campaign: Option<Campaign>,
}

impl ScheduleMessage {
    pub fn new(to: Destinations, text: MessageText, schedule_date: NaiveDateTime) -> Self {
        Self {
            to,
            text,
            schedule_date,
            campaign: None,
        }
    }

    /// Tag the scheduled send with a campaign.
    pub fn with_campaign(mut self, campaign: Campaign) -> Self {
        self.campaign = Some(campaign);
        self
    }

    pub fn to(&self) -> &Destinations {
        &self.to
    }

    pub fn text(&self) -> &MessageText {
        &self.text
    }

    pub fn schedule_date(&self) -> NaiveDateTime {
        self.schedule_date
    }

    pub fn campaign(&self) -> Option<&Campaign> {
        self.campaign.as_ref()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Query for the most recent messages sent by the account user.
///
/// The optional date range always travels as a pair; `between` makes a
/// lone start or end date unrepresentable.
pub struct LastMessages {
    per_page: PerPage,
    range: Option<(NaiveDate, NaiveDate)>,
}

impl LastMessages {
    pub fn new(per_page: PerPage) -> Self {
        Self {
            per_page,
            range: None,
        }
    }

    /// Restrict the query to messages sent between `start` and `end`.
    pub fn between(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.range = Some((start, end));
        self
    }

    pub fn per_page(&self) -> PerPage {
        self.per_page
    }

    pub fn range(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.range
    }
}
