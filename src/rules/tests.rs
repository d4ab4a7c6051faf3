use crate::config::{KeywordRule, ParkingRules, RuleTables, SnackShopRanking};
use crate::rules::messages;
use crate::rules::snacks::BUILDING_SEVEN_BAR;
use crate::{Advisor, Answer, Context, Feature, FeatureExtractor};
use chrono::NaiveDate;

fn advisor(ranking: &[&str]) -> Advisor {
    Advisor::new(RuleTables {
        keywords: vec![
            KeywordRule::new(Feature::Assistance, &["secretaria", "atendimento"], 4),
            KeywordRule::new(Feature::Parking, &["estacion", "carro", "vaga"], 3),
            KeywordRule::new(Feature::Snacks, &["lanch", "comer"], 2),
            KeywordRule::new(Feature::Greetings, &["olá", "bom dia"], 1),
            KeywordRule::new(Feature::Unsupported("library".into()), &["biblioteca"], 5),
        ],
        parking: ParkingRules::new(&["{year}-03-01|{year}-03-15", "2024-08-01|2024-08-10"], &["12:00", "18:00"])
            .unwrap(),
        snacks: SnackShopRanking::new(ranking).unwrap(),
    })
}

fn ctx(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> Context {
    Context { reference_time: NaiveDate::from_ymd_opt(y, mo, d).unwrap().and_hms_opt(h, mi, 0).unwrap() }
}

fn messages_of(answers: &[Answer]) -> Vec<&str> {
    answers.iter().map(|a| a.message.as_str()).collect()
}

#[test]
fn questions_without_keywords_get_only_the_default_answer() {
    let advisor = advisor(&["A", "B"]);
    let cases = ["", "   ", "qual a capital da França?", "biblioteca aberta?", "12345"];

    for question in cases {
        let res = advisor.ask_with(question, &ctx(2025, 3, 5, 10, 0));
        assert_eq!(res.answers, vec![Answer::advice(messages::DEFAULT_ANSWER)], "question {question:?}");
        assert_eq!(res.question, question);
    }
}

#[test]
fn lower_order_feature_answers_first_regardless_of_position() {
    let advisor = advisor(&["A", "B"]);
    let res = advisor.ask_with("onde estaciono? e onde lancho?", &ctx(2025, 5, 5, 15, 0));

    assert_eq!(
        messages_of(&res.answers),
        vec![
            messages::snack_recommendation("B").as_str(),
            messages::SNACKS_TIP,
            messages::PARKING_ALTERNATE_EXIT,
            messages::PARKING_CREDENTIAL_TIP,
        ]
    );
}

#[test]
fn feature_matched_by_many_keywords_is_evaluated_once() {
    let advisor = advisor(&["A", "B"]);
    let res = advisor.ask_with("vaga no estacionamento pro carro", &ctx(2025, 5, 5, 15, 0));

    let credential_tips = res.answers.iter().filter(|a| a.message == messages::PARKING_CREDENTIAL_TIP).count();
    assert_eq!(credential_tips, 1);
}

#[test]
fn parking_high_volume_cases() {
    // (expected high-volume message, reference time)
    let cases = [
        (true, ctx(2024, 3, 1, 0, 0)),
        (true, ctx(2024, 3, 15, 23, 59)),
        (false, ctx(2024, 3, 16, 0, 0)),
        (false, ctx(2024, 2, 29, 23, 59)),
        (true, ctx(2031, 3, 8, 9, 0)),
        (true, ctx(2024, 8, 5, 9, 0)),
        (false, ctx(2025, 8, 5, 9, 0)),
    ];

    let advisor = advisor(&["A"]);
    for (expected, context) in cases {
        let res = advisor.ask_with("estacionamento", &context);
        let high_volume = res.answers.iter().any(|a| a.message == messages::PARKING_HIGH_VOLUME);
        assert_eq!(high_volume, expected, "at {}", context.reference_time);
    }
}

#[test]
fn parking_exit_proximity_cases() {
    // (expected alternate-exit message, hour, minute)
    let cases = [
        (false, 11, 55),
        (false, 12, 0),
        (false, 12, 5),
        (true, 12, 6),
        (true, 11, 54),
        (false, 17, 57),
        (true, 15, 0),
    ];

    let advisor = advisor(&["A"]);
    for (expected, h, m) in cases {
        let res = advisor.ask_with("vaga", &ctx(2025, 6, 10, h, m));
        let alternate = res.answers.iter().any(|a| a.message == messages::PARKING_ALTERNATE_EXIT);
        assert_eq!(alternate, expected, "at {h:02}:{m:02}");
    }
}

#[test]
fn sub_second_past_the_window_shows_alternate_exit() {
    let now = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap().and_hms_nano_opt(12, 5, 0, 500).unwrap();
    let res = advisor(&["A"]).ask_with("vaga", &Context { reference_time: now });

    assert_eq!(messages_of(&res.answers), vec![messages::PARKING_ALTERNATE_EXIT, messages::PARKING_CREDENTIAL_TIP]);
}

#[test]
fn assistance_warns_on_high_volume_days() {
    let advisor = advisor(&["A"]);

    let busy = advisor.ask_with("secretaria", &ctx(2025, 3, 10, 10, 0));
    assert_eq!(messages_of(&busy.answers), vec![messages::ASSISTANCE_HIGH_VOLUME, messages::ASSISTANCE_TIP]);

    let quiet = advisor.ask_with("atendimento", &ctx(2025, 4, 10, 10, 0));
    assert_eq!(quiet.answers, vec![Answer::tip(messages::ASSISTANCE_TIP)]);
}

#[test]
fn building_seven_swing_overturns_base_ranking() {
    let advisor = advisor(&[BUILDING_SEVEN_BAR, "Cantina"]);
    let context = ctx(2025, 5, 5, 10, 0);

    let plain = advisor.ask_with("onde lancho?", &context);
    assert_eq!(plain.answers[0].message, messages::snack_recommendation("Cantina"));

    let building = advisor.ask_with("Estou no prédio 7, onde lancho?", &context);
    assert_eq!(building.answers[0].message, messages::snack_recommendation(BUILDING_SEVEN_BAR));
    assert_eq!(building.answers[1], Answer::tip(messages::SNACKS_TIP));

    let decomposed = advisor.ask_with("Estou no pre\u{301}dio 7, onde lancho?", &context);
    assert_eq!(decomposed.answers[0].message, messages::snack_recommendation(BUILDING_SEVEN_BAR));
}

#[test]
fn other_building_pushes_building_seven_bar_down() {
    // Base: A=0, B7=1, C=2. Building 3: A=1, B7=0, C=3.
    let advisor = advisor(&["A", BUILDING_SEVEN_BAR, "C"]);
    let res = advisor.ask_with("to no predio 3, quero comer", &ctx(2025, 5, 5, 10, 0));
    assert_eq!(res.answers[0].message, messages::snack_recommendation("C"));
}

#[test]
fn greeting_bands() {
    // (expected message, hour, minute)
    let cases = [
        (messages::GOOD_EVENING, 4, 59),
        (messages::GOOD_MORNING, 5, 0),
        (messages::GOOD_MORNING, 11, 59),
        (messages::GOOD_AFTERNOON, 12, 0),
        (messages::GOOD_AFTERNOON, 17, 59),
        (messages::GOOD_EVENING, 18, 0),
    ];

    let advisor = advisor(&["A"]);
    for (expected, h, m) in cases {
        let res = advisor.ask_with("Olá!", &ctx(2025, 5, 5, h, m));
        assert_eq!(res.answers, vec![Answer::advice(expected)], "at {h:02}:{m:02}");
    }
}

#[test]
fn unsupported_feature_next_to_supported_contributes_nothing() {
    let advisor = advisor(&["A"]);
    let res = advisor.ask_with("bom dia, a biblioteca está aberta?", &ctx(2025, 5, 5, 9, 0));
    assert_eq!(res.answers, vec![Answer::advice(messages::GOOD_MORNING)]);

    let features = FeatureExtractor::new(&advisor.tables().keywords).extract_features("bom dia, a biblioteca");
    assert_eq!(features, vec![Feature::Greetings, Feature::Unsupported("library".into())]);
}

#[test]
fn identical_inputs_give_identical_results() {
    let advisor = advisor(&[BUILDING_SEVEN_BAR, "A", "B"]);
    let context = ctx(2024, 3, 10, 11, 57);
    let question = "Olá! Estou no prédio 7: onde lancho, onde estaciono e onde fica a secretaria?";

    let first = advisor.ask_with(question, &context);
    let second = advisor.ask_with(question, &context);

    assert_eq!(first, second);
    assert_eq!(serde_json::to_string(&first).unwrap(), serde_json::to_string(&second).unwrap());
}
