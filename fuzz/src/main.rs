use afl::fuzz;
use swf_gradient::{decode_gradient, decode_morph_gradient, ByteCursor};

fn main() {
    fuzz!(|data: &[u8]| {
        let Some((&selector, record)) = data.split_first() else {
            return;
        };

        let with_alpha = selector & 1 != 0;

        if selector & 2 == 0 {
            let _ = decode_gradient(&mut ByteCursor::new(record), with_alpha);
        } else {
            let _ = decode_morph_gradient(&mut ByteCursor::new(record), with_alpha);
        }
    });
}
