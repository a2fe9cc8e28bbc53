use std::time::Instant;
use workpool::ThreadPool;

fn main() {
    let pool = ThreadPool::new(8).expect("failed to start pool");
    let now = Instant::now();

    let handles: Vec<_> = (0..100_000u64)
        .map(|i| pool.submit(move || i * i).expect("submit failed"))
        .collect();

    let mut sum = 0u128;
    for handle in handles {
        sum += u128::from(handle.wait().expect("task failed"));
    }

    println!("sum of squares: {sum}");
    println!("elapsed: {:?}", now.elapsed());
}
