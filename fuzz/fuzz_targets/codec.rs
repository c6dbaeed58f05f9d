#![no_main]

use endiscope::codec::{self, subword::set_le26_generic};
use endiscope::io::{read_be_at, read_le_at, write_be_at};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Offset readers must never panic, only fail with OutOfBounds
    let mut offset = 0;
    while read_le_at::<u64>(data, &mut offset).is_ok() {}
    let mut offset = data.len().saturating_sub(3);
    let _ = read_be_at::<u32>(data, &mut offset);

    if let Some(word) = data.get(..4) {
        let word: [u8; 4] = [word[0], word[1], word[2], word[3]];
        let v = codec::get_be32(&word);

        let mut fast = word;
        let mut generic = word;
        codec::set_le26(&mut fast, v);
        set_le26_generic(&mut generic, v);
        assert_eq!(fast, generic);

        let mut copy = data.to_vec();
        let mut offset = 0;
        if write_be_at(&mut copy, &mut offset, v).is_ok() {
            assert_eq!(&copy[..4], &word[..]);
        }
    }
});
