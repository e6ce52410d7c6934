use std::collections::HashSet;

use archivio_core::aid::{Aid, AidLevel, AidUseResult, UsedAid};
use archivio_core::challenge::{AttemptOutcome, Challenge, ChallengeTest, Outcome, find_challenge};
use archivio_core::conversation::{ConversationEntry, ConversationLog};
use archivio_core::{AidFlow, AidStep, ChallengeFlow, ChallengeStep, DeclaredValues};

fn tomo_challenge() -> Challenge {
    Challenge {
        id: "ch-tomo".into(),
        name: "Antico tomo".into(),
        description: "Un volume proibito giace aperto sulla scrivania.".into(),
        keywords: vec!["tomo".into(), "libro".into()],
        allow_refuge_defense: true,
        tests: vec![
            ChallengeTest {
                attribute: "Intelligenza + Occulto".into(),
                difficulty: 7,
                success_text: "Le pagine si aprono alla tua mente.".into(),
                tie_text: "Il testo resta ambiguo.".into(),
                failure_text: "Le parole ti sfuggono.".into(),
            },
            ChallengeTest {
                attribute: "Prontezza + Atletica".into(),
                difficulty: 5,
                success_text: "Afferri il tomo prima che cada.".into(),
                tie_text: "Lo trattieni a stento.".into(),
                failure_text: "Il tomo ti scivola di mano.".into(),
            },
        ],
    }
}

fn collegamento_aid() -> Aid {
    Aid {
        id: "aid-coll".into(),
        name: "Collegamento".into(),
        attribute: "Intelligenza".into(),
        levels: vec![
            AidLevel { level: 2, level_name: "minore".into(), text: "Un indizio marginale.".into() },
            AidLevel { level: 4, level_name: "medio".into(), text: "Una pista concreta.".into() },
            AidLevel { level: 5, level_name: "maggiore".into(), text: "La verità intera.".into() },
        ],
        event_date: "2025-06-14".into(),
        end_date: None,
        start_time: None,
        end_time: None,
    }
}

// Question -> dispatch -> offer -> choose -> input -> server outcome ->
// transcript, the whole happy path a dashboard session walks.
#[test]
fn challenge_from_question_to_transcript() {
    let challenges = [tomo_challenge()];
    let mut attempted = HashSet::new();
    let mut log = ConversationLog::new();

    let question = "Sfoglio il tomo sulla scrivania";
    log.push(ConversationEntry::UserText(question.into()));

    let hit = find_challenge(question, &challenges, &attempted).cloned().unwrap();
    log.push(ConversationEntry::ChallengeOffer {
        challenge_id: hit.id.clone(),
        name: hit.name.clone(),
        description: hit.description.clone(),
    });

    let mut flow = ChallengeFlow::new(hit);
    flow.select_test(0);
    let req = flow.attempt_request(5, true).unwrap();
    assert_eq!(req.challenge_id, "ch-tomo");
    assert_eq!(req.test_index, 0);
    assert!(req.use_refuge);

    // The server resolves and replies with the full bundle.
    attempted.insert(req.challenge_id.clone());
    let outcome = AttemptOutcome {
        player_value: 5,
        player_roll: 4,
        player_result: 20,
        difficulty: 7,
        difficulty_roll: 2,
        difficulty_result: 14,
        outcome: Outcome::Success,
        message: "Successo!: Le pagine si aprono alla tua mente.".into(),
    };
    flow.complete(outcome.clone());
    assert!(matches!(flow.step, ChallengeStep::Result { .. }));

    log.push(ConversationEntry::ChallengeResult {
        name: flow.challenge.name.clone(),
        outcome,
    });
    assert_eq!(log.visible_len(), 3);

    // The same question no longer re-offers the attempted challenge.
    assert!(find_challenge(question, &challenges, &attempted).is_none());
}

#[test]
fn failed_attempt_leaves_flow_in_input_for_resubmission() {
    let mut flow = ChallengeFlow::new(tomo_challenge());
    flow.select_test(1);
    let req = flow.attempt_request(3, false).unwrap();
    assert_eq!(req.test_index, 1);

    // Network failure: no outcome arrives, the machine does not move.
    assert!(matches!(flow.step, ChallengeStep::Input { test_index: 1 }));
    assert!(flow.attempt_request(3, false).is_some());
}

#[test]
fn aid_declaration_to_redeemed_text() {
    let aids = [collegamento_aid()];
    let used = [UsedAid { aid_id: "aid-coll".into(), level: 2 }];

    let mut flow = AidFlow::new();
    flow.declare("Intelligenza", 4);
    flow.declare("Percezione", 1);

    let eligible = flow.proceed(&aids, &used);
    assert_eq!(flow.step, AidStep::Select);
    assert_eq!(eligible.len(), 1);
    let names: Vec<&str> = eligible[0].levels.iter().map(|l| l.level_name.as_str()).collect();
    assert_eq!(names, ["medio"]);

    let req = flow.use_request(&eligible[0].aid, 4).unwrap();
    assert_eq!(req.player_attribute_value, 4);

    let mut log = ConversationLog::new();
    log.push(ConversationEntry::AidResult {
        name: eligible[0].aid.name.clone(),
        result: AidUseResult {
            text: "Una pista concreta.".into(),
            attribute: "Intelligenza".into(),
            level_name: "medio".into(),
        },
    });
    assert_eq!(log.visible_len(), 1);
}

#[test]
fn aid_modify_values_round_trip() {
    let aids = [collegamento_aid()];
    let mut flow = AidFlow::new();
    flow.declare("Intelligenza", 2);
    let first = flow.proceed(&aids, &[]);
    assert_eq!(first[0].levels.len(), 1);

    flow.back_to_input();
    flow.declare("Intelligenza", 5);
    let second = flow.proceed(&aids, &[]);
    assert_eq!(second[0].levels.len(), 3);
}

#[test]
fn restored_declarations_respect_server_used_pairs() {
    let aids = [collegamento_aid()];
    let stored: DeclaredValues = [("Intelligenza".to_string(), 5)].into_iter().collect();
    let used = [
        UsedAid { aid_id: "aid-coll".into(), level: 2 },
        UsedAid { aid_id: "aid-coll".into(), level: 4 },
    ];
    let mut flow = AidFlow::with_declared(stored);
    let eligible = flow.proceed(&aids, &used);
    let names: Vec<&str> = eligible[0].levels.iter().map(|l| l.level_name.as_str()).collect();
    assert_eq!(names, ["maggiore"]);
}

#[test]
fn oracle_answer_rollback_on_failed_send() {
    let mut log = ConversationLog::new();
    let id = log.push_pending(ConversationEntry::UserText("Chi mi osserva?".into()));
    assert_eq!(log.visible_len(), 1);

    // The send fails; the optimistic entry disappears and the input is
    // free to resubmit.
    log.rollback(id);
    assert!(log.is_empty());

    let id = log.push_pending(ConversationEntry::UserText("Chi mi osserva?".into()));
    log.commit(id);
    log.push(ConversationEntry::OracleText("Occhi antichi, da ogni scaffale.".into()));
    assert_eq!(log.visible_len(), 2);
}
