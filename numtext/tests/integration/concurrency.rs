//! The codec keeps no shared state, so concurrent use must give exactly the
//! same results as sequential use.

use numtext::codec::decode;
use numtext::codec::encode;
use numtext::codec::encode_into;
use numtext::codec::DECIMAL_BUFFER_LEN;

const THREADS: usize = 8;
const VALUES_PER_THREAD: i64 = 5_000;

fn values_for(thread: usize) -> impl Iterator<Item = i64> {
    let base = (thread as i64) * 1_000_000_007;
    (0..VALUES_PER_THREAD).map(move |i| base.wrapping_mul(i).wrapping_sub(i * 7919))
}

fn convert(thread: usize) -> Vec<(String, Result<i64, numtext::codec::Error>)> {
    let mut buf = [0u8; DECIMAL_BUFFER_LEN];
    values_for(thread)
        .map(|value| {
            let text = encode_into(value, &mut buf).to_string();
            let decoded = decode::<i64>(&text);
            (text, decoded)
        })
        .collect()
}

#[test]
fn concurrent_calls_match_sequential_calls() {
    let sequential: Vec<_> = (0..THREADS).map(convert).collect();

    let concurrent: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|thread| scope.spawn(move || convert(thread)))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    assert_eq!(sequential, concurrent);
}

#[test]
fn encoded_values_can_be_sent_between_threads() {
    let text = std::thread::spawn(|| encode(u64::MAX)).join().unwrap();
    assert_eq!(text, "18446744073709551615");
}
