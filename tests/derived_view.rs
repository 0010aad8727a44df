use chrono::{Days, Local, NaiveDate};

use showlog::{
    show::ShowDraft,
    types::{DayPeriod, EventStatus},
    view::{
        ShowCard, event_status, event_status_on, maps_search_url, parse_event_date, time_of_day,
    },
};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn ddmmyyyy(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

#[test]
fn time_of_day_boundaries() {
    assert_eq!(time_of_day("05:59"), DayPeriod::Night);
    assert_eq!(time_of_day("06:00"), DayPeriod::Day);
    assert_eq!(time_of_day("12:00"), DayPeriod::Day);
    assert_eq!(time_of_day("17:59"), DayPeriod::Day);
    assert_eq!(time_of_day("18:00"), DayPeriod::Night);
    assert_eq!(time_of_day("00:00"), DayPeriod::Night);
    assert_eq!(time_of_day("23:59"), DayPeriod::Night);
}

#[test]
fn time_of_day_unknown_inputs() {
    assert_eq!(time_of_day(""), DayPeriod::Unknown);
    assert_eq!(time_of_day("12"), DayPeriod::Unknown);
    assert_eq!(time_of_day("ab:cd"), DayPeriod::Unknown);
    assert_eq!(time_of_day(":30"), DayPeriod::Unknown);
    assert_eq!(time_of_day("   "), DayPeriod::Unknown);
}

#[test]
fn time_of_day_lenient_hour_parsing() {
    assert_eq!(time_of_day("  07:15  "), DayPeriod::Day);
    assert_eq!(time_of_day("7h:00"), DayPeriod::Day);
    assert_eq!(time_of_day("-3:00"), DayPeriod::Night);
    assert_eq!(time_of_day("25:00"), DayPeriod::Night);
    assert_eq!(time_of_day("99999999999999999999999:00"), DayPeriod::Night);
}

#[test]
fn labels_and_badges() {
    assert_eq!(DayPeriod::Day.as_str(), "day");
    assert_eq!(DayPeriod::Night.as_str(), "night");
    assert_eq!(DayPeriod::Unknown.as_str(), "unknown");
    assert_eq!(DayPeriod::Unknown.badge(), None);
    assert_eq!(DayPeriod::Night.badge(), Some("🌙 Night"));
    assert_eq!(EventStatus::Active.as_str(), "active");
    assert_eq!(EventStatus::Finished.as_str(), "finished");
    assert_eq!(EventStatus::Finished.label(), "Finished");
}

#[test]
fn status_relative_to_fixed_today() {
    let today = ymd(2026, 10, 19);
    assert_eq!(event_status_on("19/10/2026", today), EventStatus::Active);
    assert_eq!(event_status_on("18/10/2026", today), EventStatus::Finished);
    assert_eq!(event_status_on("20/10/2026", today), EventStatus::Active);
    assert_eq!(event_status_on("01/01/2099", today), EventStatus::Active);
    assert_eq!(event_status_on("31/12/1999", today), EventStatus::Finished);
}

#[test]
fn status_relative_to_local_today() {
    let today = Local::now().date_naive();
    let yesterday = today.checked_sub_days(Days::new(1)).unwrap();
    let tomorrow = today.checked_add_days(Days::new(1)).unwrap();

    assert_eq!(event_status(&ddmmyyyy(today)), EventStatus::Active);
    assert_eq!(event_status(&ddmmyyyy(yesterday)), EventStatus::Finished);
    assert_eq!(event_status(&ddmmyyyy(tomorrow)), EventStatus::Active);
}

#[test]
fn empty_and_malformed_dates_are_finished() {
    let today = ymd(2026, 10, 19);
    assert_eq!(event_status(""), EventStatus::Finished);
    assert_eq!(event_status_on("", today), EventStatus::Finished);
    assert_eq!(event_status_on("aa/bb/cccc", today), EventStatus::Finished);
    assert_eq!(event_status_on("19/10", today), EventStatus::Finished);
    assert_eq!(event_status_on("not a date", today), EventStatus::Finished);
    assert_eq!(event_status_on("01/01/999999999999", today), EventStatus::Finished);
    assert_eq!(event_status_on("0x/10/2099", today), EventStatus::Finished);
    assert_eq!(event_status_on("-0x10/10/2099", today), EventStatus::Finished);
    assert_eq!(event_status_on("0b12/10/2099", today), EventStatus::Finished);
    assert_eq!(event_status_on("Infinity/10/2099", today), EventStatus::Finished);
    assert_eq!(event_status_on("inf/10/2099", today), EventStatus::Finished);
    assert_eq!(event_status_on("NaN/10/2099", today), EventStatus::Finished);
    assert_eq!(event_status_on("01/01/1e300", today), EventStatus::Finished);
}

#[test]
fn out_of_range_parts_roll_over() {
    assert_eq!(parse_event_date("32/01/2030"), Some(ymd(2030, 2, 1)));
    assert_eq!(parse_event_date("00/03/2030"), Some(ymd(2030, 2, 28)));
    assert_eq!(parse_event_date("01/13/2030"), Some(ymd(2031, 1, 1)));
    assert_eq!(parse_event_date("01/00/2030"), Some(ymd(2029, 12, 1)));
    assert_eq!(parse_event_date("31/02/2030"), Some(ymd(2030, 3, 3)));
    assert_eq!(parse_event_date(" 05 / 06 / 2030 "), Some(ymd(2030, 6, 5)));
    assert_eq!(parse_event_date("05/06/2030/extra"), Some(ymd(2030, 6, 5)));
}

#[test]
fn numeric_literal_parts_truncate_toward_zero() {
    let today = ymd(2026, 10, 19);
    assert_eq!(event_status_on("1.5/10/2099", today), EventStatus::Active);
    assert_eq!(event_status_on("01/1.9/2099", today), EventStatus::Active);
    assert_eq!(event_status_on("0x10/10/2099", today), EventStatus::Active);
    assert_eq!(event_status_on("1e1/10/2099", today), EventStatus::Active);

    assert_eq!(parse_event_date("1.5/10/2099"), Some(ymd(2099, 10, 1)));
    assert_eq!(parse_event_date("01/1.9/2099"), Some(ymd(2099, 1, 1)));
    assert_eq!(parse_event_date("0x10/10/2099"), Some(ymd(2099, 10, 16)));
    assert_eq!(parse_event_date("1e1/10/2099"), Some(ymd(2099, 10, 10)));
    assert_eq!(parse_event_date("0B11/0o2/2099"), Some(ymd(2099, 2, 3)));
    assert_eq!(parse_event_date("-1.5/10/2099"), Some(ymd(2099, 9, 29)));
    assert_eq!(parse_event_date(".5e1/+10/2099."), Some(ymd(2099, 10, 5)));
}

#[test]
fn maps_url_percent_encodes_address() {
    assert_eq!(
        maps_search_url("123 Main St"),
        "https://www.google.com/maps/search/?api=1&query=123%20Main%20St"
    );
    assert_eq!(
        maps_search_url("Av. Paulista, 1578 - São Paulo/SP"),
        concat!(
            "https://www.google.com/maps/search/?api=1&query=",
            "Av.%20Paulista%2C%201578%20-%20S%C3%A3o%20Paulo%2FSP"
        )
    );
    assert_eq!(
        maps_search_url("a&b=c?d#e"),
        "https://www.google.com/maps/search/?api=1&query=a%26b%3Dc%3Fd%23e"
    );
    assert_eq!(
        maps_search_url("Joe's (Bar)! ~*_."),
        "https://www.google.com/maps/search/?api=1&query=Joe's%20(Bar)!%20~*_."
    );
    assert_eq!(maps_search_url(""), "https://www.google.com/maps/search/?api=1&query=");
}

#[test]
fn card_derives_labels_from_record() {
    let rec = ShowDraft {
        title: "Band A".to_string(),
        date: "01/01/2099".to_string(),
        time: "20:00".to_string(),
        city: "Metropolis".to_string(),
        venue_address: "123 Main St".to_string(),
        banner_image_ref: "img://1".to_string(),
    }
    .validate()
    .unwrap();

    let card = ShowCard::build(3, &rec, ymd(2026, 10, 19));
    assert_eq!(card.index, 3);
    assert_eq!(card.title, "Band A");
    assert_eq!(card.day_period, DayPeriod::Night);
    assert_eq!(card.status, EventStatus::Active);
    assert_eq!(
        card.maps_url,
        "https://www.google.com/maps/search/?api=1&query=123%20Main%20St"
    );
    assert_eq!(card.banner_image_ref, "img://1");

    let json = serde_json::to_value(&card).unwrap();
    assert_eq!(json["dayPeriod"], "night");
    assert_eq!(json["status"], "active");
}
