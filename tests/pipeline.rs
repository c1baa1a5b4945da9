use lpipe::{Config, Cursor, CursorExt, Op, PipeErr, Tokens, from};
use std::cell::Cell;

fn counted<'a>(calls: &'a Cell<usize>) -> impl FnMut(&i32) -> i32 + 'a {
    move |x: &i32| {
        calls.set(calls.get() + 1);
        *x
    }
}

/// 两次`advance`之间多次读取当前元素，结果一致，且链中的用户函数只调用一次。
fn assert_peek_idempotent<C: Cursor<Item = i32>>(mut cursor: C, calls: &Cell<usize>) {
    while cursor.has_current() {
        let before = calls.get();
        let first = *cursor.current().unwrap();
        for _ in 0..3 {
            assert!(cursor.has_current());
            assert_eq!(cursor.current(), Ok(&first));
        }
        assert!(calls.get() - before <= 1);
        cursor.advance();
    }
    assert!(cursor.current().is_err());
}

#[test]
fn test_example_squares() {
    let res = from([1, 2, 3, 4, 5]).map(|x| x * x).filter_neq(25).filter(|x| *x > 3).skip(2).to_vec();
    assert_eq!(res, vec![16]);
}

#[test]
fn test_example_stream() {
    let mut tokens = Tokens::<_, i32>::new("1 2 3 -1 4".as_bytes(), &[]);
    let res = from(tokens.by_ref()).take(4).take_while_neq(-1).to_vec();
    assert_eq!(res, vec![1, 2, 3]);
    assert_eq!(tokens.collect::<Vec<_>>(), vec![4]);
}

#[test]
fn test_example_sqrt_to_writer() {
    let tokens = Tokens::<_, i32>::new("4 16".as_bytes(), &[]);
    let mut out = Vec::new();
    from(tokens).map(|x| (f64::from(*x).sqrt() + 1e-6) as i32).write_to(&mut out, &[]).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "2\n4\n");
}

#[test]
fn test_empty_result() {
    assert_eq!(from(vec![1, 4, 4, 4, 2, 1]).until_eq(1).to_vec(), Vec::<i32>::new());
    assert_eq!(from(vec![1, 4, 4, 4, 2, 1]).take_while_neq(1).to_vec(), Vec::<i32>::new());
}

#[test]
fn test_zero_cases() {
    assert_eq!(from(vec![1, 2, 3]).skip(0).to_vec(), vec![1, 2, 3]);

    let pulled = Cell::new(0);
    let source = (1..=3).inspect(|_| pulled.set(pulled.get() + 1));
    assert_eq!(from(source).take(0).to_vec(), Vec::<i32>::new());
    assert_eq!(pulled.get(), 0);

    let calls = Cell::new(0);
    let mut cursor = from(vec![1, 2, 3]).map(counted(&calls)).take(0).until_eq(9).filter(|_| true);
    assert!(!cursor.has_current());
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_peek_idempotence_every_stage() {
    let xs = vec![5, 1, 4, 1, 3, 9, 2, 6];

    let calls = Cell::new(0);
    assert_peek_idempotent(from(xs.clone()).map(counted(&calls)), &calls);
    assert_eq!(calls.get(), xs.len());

    let calls = Cell::new(0);
    assert_peek_idempotent(from(xs.clone()).map(counted(&calls)).skip(3), &calls);
    assert_eq!(calls.get(), xs.len() - 3);

    let calls = Cell::new(0);
    assert_peek_idempotent(from(xs.clone()).map(counted(&calls)).take(4), &calls);
    assert_eq!(calls.get(), 4);

    let calls = Cell::new(0);
    assert_peek_idempotent(from(xs.clone()).map(counted(&calls)).until_eq(9), &calls);
    assert_eq!(calls.get(), 6);

    let calls = Cell::new(0);
    assert_peek_idempotent(from(xs.clone()).map(counted(&calls)).filter(|x| x % 2 == 0), &calls);
    assert_eq!(calls.get(), xs.len());

    let calls = Cell::new(0);
    assert_peek_idempotent(from(xs.clone()).map(counted(&calls)).skip_while(|x| *x != 3), &calls);
    assert_eq!(calls.get(), xs.len());

    let calls = Cell::new(0);
    assert_peek_idempotent(from(xs.clone()).map(counted(&calls)).uniq().boxed(), &calls);
    assert_eq!(calls.get(), xs.len());

    let predicate_calls = Cell::new(0);
    let filter = from(xs.clone()).filter(|x| {
        predicate_calls.set(predicate_calls.get() + 1);
        *x > 2
    });
    let calls = Cell::new(0);
    assert_peek_idempotent(filter.map(counted(&calls)), &calls);
    assert_eq!(predicate_calls.get(), xs.len());
    assert_eq!(calls.get(), 5);
}

#[test]
fn test_illegal_state_is_reported() {
    let mut cursor = from(vec![1]).map(|x| x + 1);
    assert_eq!(cursor.current(), Ok(&2));
    cursor.advance();
    assert_eq!(cursor.current(), Err(PipeErr::IllegalState { stage: "source" }));
    cursor.advance();
    assert!(!cursor.has_current());
}

#[test]
#[should_panic(expected = "mapper failed")]
fn test_user_panic_propagates() {
    let _ = from(vec![1, 2, 3])
        .map(|x| if *x == 2 { panic!("mapper failed") } else { *x })
        .filter(|_| true)
        .to_vec();
}

#[test]
fn test_ops_on_token_stream() {
    let mut tokens = Tokens::<_, String>::new("b a b c\nd a e".as_bytes(), &[]);
    let mut pipe = from(tokens.by_ref()).boxed();
    for op in [Op::UntilEq("e".to_owned()), Op::Uniq, Op::FilterNeq("c".to_owned())] {
        pipe = op.wrap(pipe);
    }
    assert_eq!(pipe.join(","), "b,a,d");
    assert!(tokens.take_err().is_none());
}

#[test]
fn test_token_errors() {
    let mut tokens = Tokens::<_, i32>::new("1 2 x 3".as_bytes(), &[]);
    assert_eq!(from(tokens.by_ref()).count(), 2);
    assert!(matches!(tokens.take_err(), Some(PipeErr::ParseTokenErr { .. })));

    let tokens = Tokens::<_, i32>::new("1 2 x 3".as_bytes(), &[Config::SkipErr]);
    assert_eq!(from(tokens).to_vec(), vec![1, 2, 3]);
}
