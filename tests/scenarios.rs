use fake_stream::{FakeStream, ReadStatus};
use rstest::rstest;

#[rstest]
#[case(0, 10, 5, &[ReadStatus::Filled(5), ReadStatus::Filled(5), ReadStatus::End(0)])]
#[case(0, 7, 5, &[ReadStatus::Filled(5), ReadStatus::End(2), ReadStatus::End(0)])]
#[case(10, 10, 2, &[ReadStatus::Filled(2), ReadStatus::Filled(2), ReadStatus::Filled(2)])]
#[case(0, 300, 270, &[ReadStatus::Filled(270), ReadStatus::End(30)])]
#[case(0, 257, 257, &[ReadStatus::Filled(257), ReadStatus::End(0)])]
#[case(5, 0, 4, &[ReadStatus::End(0), ReadStatus::End(0)])]
fn read_sequence(
    #[case] start: u64,
    #[case] length: u64,
    #[case] buf_size: usize,
    #[case] expected: &[ReadStatus],
) {
    let mut stream = FakeStream::new(start, length);
    let mut buf = vec![0u8; buf_size];
    let mut next = start;

    for status in expected {
        assert_eq!(stream.read_status(&mut buf), *status);
        for byte in &buf[..status.count()] {
            assert_eq!(*byte, next as u8);
            next += 1;
        }
    }
}

#[rstest]
#[case(0, 10)]
#[case(10, 10)]
#[case(250, 20)]
fn reset_restores_first_chunk(#[case] start: u64, #[case] length: u64) {
    let mut stream = FakeStream::new(start, length);
    let mut first = [0; 2];
    let mut again = [0; 2];

    stream.read_status(&mut first);
    stream.read_status(&mut [0; 3]);
    stream.reset();
    stream.read_status(&mut again);

    assert_eq!(first, again);
    assert_eq!(first, [start as u8, (start + 1) as u8]);
}

#[test]
fn over_byte_range_single_read() {
    let mut stream = FakeStream::new(0, 257);
    let mut buf = [0; 257];

    let status = stream.read_status(&mut buf);
    assert_eq!(status.count(), 257);
    assert!(!status.is_exhausted());
    for (i, byte) in buf.iter().enumerate() {
        assert_eq!(*byte, i as u8);
    }
    assert!(stream.is_exhausted());
}
