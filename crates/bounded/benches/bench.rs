use bounded_collections::{
    BoundedBitmap,
    BoundedStack,
};
use criterion::{
    black_box,
    criterion_group,
    criterion_main,
    Criterion,
};

criterion_group!(
    bench_bounded,
    bench_bounded_bitmap_set,
    bench_bounded_bitmap_get,
    bench_bounded_stack_push_pop
);
criterion_main!(bench_bounded);

fn bench_bounded_bitmap_get(c: &mut Criterion) {
    let mut g = c.benchmark_group("bounded_bitmap::get");
    let len = 100_000;
    let bit_map = <BoundedBitmap<usize, bool>>::with_len(len);
    let vec_bool = vec![false; len];
    g.bench_function("BoundedBitmap", |bencher| {
        bencher.iter(|| {
            for i in 0..len {
                assert_eq!(bit_map.get(i), Ok(false));
            }
        })
    });
    g.bench_function("Vec<bool> (reference)", |bencher| {
        bencher.iter(|| {
            for i in 0..len {
                assert!(!vec_bool[i]);
            }
        })
    });
}

fn bench_bounded_bitmap_set(c: &mut Criterion) {
    let mut g = c.benchmark_group("bounded_bitmap::set");
    let len = 100_000;
    let mut bit_map = <BoundedBitmap<usize, bool>>::with_len(len);
    let mut vec_bool = vec![false; len];
    g.bench_function("BoundedBitmap", |bencher| {
        bencher.iter(|| {
            for i in 0..len {
                bit_map.set(i, true).unwrap();
            }
        })
    });
    g.bench_function("Vec<bool> (reference)", |bencher| {
        bencher.iter(|| {
            for i in 0..len {
                vec_bool[i] = true;
            }
        })
    });
}

fn bench_bounded_stack_push_pop(c: &mut Criterion) {
    let mut g = c.benchmark_group("bounded_stack::push_pop");
    let len = 10_000;
    let mut stack = <BoundedStack<usize>>::with_limit(len);
    let mut vec = Vec::with_capacity(len);
    g.bench_function("BoundedStack", |bencher| {
        bencher.iter(|| {
            for i in 0..len {
                stack.try_push(i).unwrap();
            }
            while let Some(value) = stack.pop() {
                black_box(value);
            }
        })
    });
    g.bench_function("Vec<usize> (reference)", |bencher| {
        bencher.iter(|| {
            for i in 0..len {
                vec.push(i);
            }
            while let Some(value) = vec.pop() {
                black_box(value);
            }
        })
    });
}
