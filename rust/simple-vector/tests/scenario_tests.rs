use simple_vector::{SimpleVector, simple_vector};
use simple_vector_testkit::data_gen::generate_vector;
use simple_vector_testkit::elements::MoveOnly;

const LARGE_SIZE: usize = 1_000_000;

#[test]
fn test_generated_vector_contents() {
    let v = generate_vector(10);
    assert_eq!(v, [1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    assert_eq!(*v.at(9).unwrap(), 10);
}

#[test]
fn test_temporary_move_construction() {
    let moved_vector = generate_vector(LARGE_SIZE);
    assert_eq!(moved_vector.len(), LARGE_SIZE);
    assert_eq!(moved_vector[LARGE_SIZE - 1], LARGE_SIZE as i32);
}

#[test]
fn test_temporary_move_assignment() {
    let mut moved_vector = SimpleVector::new();
    assert_eq!(moved_vector.len(), 0);
    moved_vector = generate_vector(LARGE_SIZE);
    assert_eq!(moved_vector.len(), LARGE_SIZE);

    let mut temporary = generate_vector(3);
    moved_vector.move_assign(&mut temporary);
    assert_eq!(moved_vector, [1, 2, 3]);
    assert_eq!(temporary.len(), LARGE_SIZE);
}

#[test]
fn test_named_move_construction() {
    let mut vector_to_move = generate_vector(LARGE_SIZE);
    assert_eq!(vector_to_move.len(), LARGE_SIZE);

    let moved_vector = vector_to_move.take();
    assert_eq!(moved_vector.len(), LARGE_SIZE);
    assert_eq!(vector_to_move.len(), 0);
    assert_eq!(vector_to_move.capacity(), 0);
}

#[test]
fn test_named_move_then_reuse_source() {
    let mut vector_to_move = generate_vector(LARGE_SIZE);
    let moved_vector = std::mem::take(&mut vector_to_move);
    assert_eq!(moved_vector.len(), LARGE_SIZE);
    assert!(vector_to_move.is_empty());

    vector_to_move.push_back(1);
    assert_eq!(vector_to_move, [1]);
}

fn move_only_vector(size: usize) -> SimpleVector<MoveOnly> {
    let mut v = SimpleVector::new();
    for i in 0..size {
        v.push_back(MoveOnly::new(i));
    }
    v
}

#[test]
fn test_noncopyable_move_construction() {
    let size = 5;
    let mut vector_to_move = move_only_vector(size);

    let moved_vector = vector_to_move.take();
    assert_eq!(moved_vector.len(), size);
    assert_eq!(vector_to_move.len(), 0);
    for (i, x) in moved_vector.iter().enumerate() {
        assert_eq!(x.get(), i);
    }
}

#[test]
fn test_noncopyable_push_back() {
    let size = 5;
    let mut source = MoveOnly::new(size);
    let mut v = move_only_vector(size);
    v.push_back(MoveOnly::take_from(&mut source));

    assert_eq!(v.len(), size + 1);
    assert_eq!(source.get(), 0);
    for i in 0..=size {
        assert_eq!(v[i].get(), i);
    }
}

#[test]
fn test_noncopyable_insert() {
    let size = 5;
    let mut v = move_only_vector(size);

    // front
    let pos = v.insert(0, MoveOnly::new(size + 1));
    assert_eq!(v.len(), size + 1);
    assert_eq!(v[pos].get(), size + 1);
    assert_eq!(v.first().map(MoveOnly::get), Some(size + 1));

    // back
    let end = v.len();
    v.insert(end, MoveOnly::new(size + 2));
    assert_eq!(v.len(), size + 2);
    assert_eq!(v.last().map(MoveOnly::get), Some(size + 2));

    // middle
    let pos = v.insert(3, MoveOnly::new(size + 3));
    assert_eq!(v.len(), size + 3);
    assert_eq!(v[pos].get(), size + 3);
}

#[test]
fn test_noncopyable_erase() {
    let mut v = move_only_vector(3);
    let pos = v.erase(0);
    assert_eq!(v[pos].get(), 1);
}

#[test]
fn test_noncopyable_pop_back_returns_value() {
    let mut v = move_only_vector(3);
    let last = v.pop_back();
    assert_eq!(last.get(), 2);
    assert_eq!(v.len(), 2);
}

#[test]
fn test_documented_examples() {
    let mut v = simple_vector![1, 2, 3];
    v.insert(1, 42);
    assert_eq!(v, [1, 42, 2, 3]);
    v.erase(1);
    assert_eq!(v, [1, 2, 3]);

    let mut v1 = simple_vector![42, 666];
    let mut v2 = simple_vector![0, 1, 2];
    v1.swap(&mut v2);
    assert_eq!(v1, [0, 1, 2]);
    assert_eq!(v2, [42, 666]);
}

#[test]
fn test_vectors_of_vectors() {
    let mut outer: SimpleVector<SimpleVector<String>> = SimpleVector::new();
    for i in 0..10 {
        let inner = (0..i).map(|j| format!("{i}:{j}")).collect();
        outer.push_back(inner);
    }
    outer.insert(0, simple_vector![String::from("head")]);
    outer.erase(5);

    let copy = outer.clone();
    assert_eq!(copy, outer);
    assert_eq!(copy[0][0], "head");
    assert_eq!(copy.iter().map(|v| v.len()).sum::<usize>(), 1 + 45 - 4);
}
