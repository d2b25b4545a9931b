//! Session tests - menu commands applied atomically

use tetris_reserve::core::{CoreError, Outcome, Session};
use tetris_reserve::types::{MenuOption, Variant};

fn queue_ids(session: &Session) -> Vec<u64> {
    session.queue().iter().map(|p| p.id).collect()
}

fn stack_ids(session: &Session) -> Vec<u64> {
    session.stack().iter().map(|p| p.id).collect()
}

#[test]
fn test_session_lifecycle() {
    let mut session = Session::new(12345, Variant::Advanced);
    assert_eq!(queue_ids(&session), vec![0, 1, 2, 3, 4]);

    let Ok(Outcome::Played(p)) = session.apply(MenuOption::Play) else {
        panic!("play should succeed");
    };
    assert_eq!(p.id, 0);

    let Ok(Outcome::Reserved(p)) = session.apply(MenuOption::Reserve) else {
        panic!("reserve should succeed");
    };
    assert_eq!(p.id, 1);
    assert_eq!(queue_ids(&session), vec![2, 3, 4, 5, 6]);
    assert_eq!(stack_ids(&session), vec![1]);

    let Ok(Outcome::UsedReserve(p)) = session.apply(MenuOption::UseReserve) else {
        panic!("use reserve should succeed");
    };
    assert_eq!(p.id, 1);
    assert!(session.stack().is_empty());
    assert_eq!(session.turn(), 3);
}

#[test]
fn test_fill_reserve_then_triple_swap() {
    let mut session = Session::new(3, Variant::Advanced);
    for _ in 0..3 {
        session.apply(MenuOption::Reserve).unwrap();
    }
    assert_eq!(stack_ids(&session), vec![2, 1, 0]);
    assert_eq!(queue_ids(&session), vec![3, 4, 5, 6, 7]);

    assert_eq!(
        session.apply(MenuOption::SwapTriple),
        Ok(Outcome::SwappedTriple)
    );
    assert_eq!(queue_ids(&session), vec![2, 1, 0, 6, 7]);
    assert_eq!(stack_ids(&session), vec![3, 4, 5]);
}

#[test]
fn test_rejected_commands_leave_state_untouched() {
    let mut session = Session::new(3, Variant::Advanced);
    let before = session.snapshot();

    assert_eq!(
        session.apply(MenuOption::UseReserve),
        Err(CoreError::ReserveEmpty)
    );
    assert_eq!(
        session.apply(MenuOption::SwapFront),
        Err(CoreError::OperandEmpty)
    );
    assert_eq!(
        session.apply(MenuOption::SwapTriple),
        Err(CoreError::InsufficientElements)
    );

    assert_eq!(session.snapshot(), before);
}

#[test]
fn test_reserve_rejected_when_full() {
    let mut session = Session::new(3, Variant::Basic);
    for _ in 0..3 {
        session.apply(MenuOption::Reserve).unwrap();
    }
    let before = session.snapshot();

    assert_eq!(
        session.apply(MenuOption::Reserve),
        Err(CoreError::CapacityExceeded)
    );
    assert_eq!(session.snapshot(), before);
}

#[test]
fn test_same_seed_same_session() {
    let script = [
        MenuOption::Play,
        MenuOption::Reserve,
        MenuOption::SwapFront,
        MenuOption::Reserve,
        MenuOption::Play,
    ];
    let mut a = Session::new(2024, Variant::Advanced);
    let mut b = Session::new(2024, Variant::Advanced);
    for option in script {
        assert_eq!(a.apply(option), b.apply(option));
    }
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_snapshot_orders() {
    let mut session = Session::new(8, Variant::Advanced);
    session.apply(MenuOption::Reserve).unwrap();
    session.apply(MenuOption::Reserve).unwrap();

    let snapshot = session.snapshot();
    assert_eq!(snapshot.turn, 2);
    assert_eq!(snapshot.next_id, 7);
    assert_eq!(snapshot.seed, 8);
    assert_eq!(
        snapshot.queue.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![2, 3, 4, 5, 6]
    );
    assert_eq!(
        snapshot.reserve.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![1, 0]
    );
}
