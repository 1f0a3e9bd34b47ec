use super::K512;

#[inline(always)]
pub fn small_sigma0(x: u64) -> u64 {
    x.rotate_right(1) ^ x.rotate_right(8) ^ (x >> 7)
}

#[inline(always)]
pub fn small_sigma1(x: u64) -> u64 {
    x.rotate_right(19) ^ x.rotate_right(61) ^ (x >> 6)
}

#[inline(always)]
pub fn big_sigma0(x: u64) -> u64 {
    x.rotate_right(28) ^ x.rotate_right(34) ^ x.rotate_right(39)
}

#[inline(always)]
pub fn big_sigma1(x: u64) -> u64 {
    x.rotate_right(14) ^ x.rotate_right(18) ^ x.rotate_right(41)
}

#[inline(always)]
pub fn ch(e: u64, f: u64, g: u64) -> u64 {
    (e & f) ^ ((!e) & g)
}

#[inline(always)]
pub fn maj(a: u64, b: u64, c: u64) -> u64 {
    (a & b) ^ (a & c) ^ (b & c)
}

/// Extends the rolling 16-word message schedule in place for round `i`.
#[inline(always)]
fn schedule(w: &mut [u64; 16], i: usize) {
    let w16 = w[(i - 16) & 15];
    let w15 = w[(i - 15) & 15];
    let w7 = w[(i - 7) & 15];
    let w2 = w[(i - 2) & 15];

    w[i & 15] = w16
        .wrapping_add(small_sigma0(w15))
        .wrapping_add(w7)
        .wrapping_add(small_sigma1(w2));
}

#[cfg(not(feature = "speed"))]
pub fn all_rounds(state: &mut [u64; 8], w: &mut [u64; 16]) {
    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];
    let mut e = state[4];
    let mut f = state[5];
    let mut g = state[6];
    let mut h = state[7];

    for (i, &ki) in K512.iter().enumerate() {
        if i >= 16 {
            schedule(w, i);
        }

        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(w[i & 15])
            .wrapping_add(ki);

        let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
    state[5] = state[5].wrapping_add(f);
    state[6] = state[6].wrapping_add(g);
    state[7] = state[7].wrapping_add(h);
}

// Unrolled variant: the working variables rotate through the macro
// arguments instead of being shuffled every round.
#[cfg(feature = "speed")]
pub fn all_rounds(state: &mut [u64; 8], w: &mut [u64; 16]) {
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    macro_rules! R {
        ($a:ident, $b:ident, $c:ident, $d:ident, $e:ident, $f:ident, $g:ident, $h:ident, $i:expr) => {{
            let i = $i;
            if i >= 16 {
                schedule(w, i);
            }

            let t1 = $h
                .wrapping_add(big_sigma1($e))
                .wrapping_add(ch($e, $f, $g))
                .wrapping_add(w[i & 15])
                .wrapping_add(K512[i]);

            let t2 = big_sigma0($a).wrapping_add(maj($a, $b, $c));

            $d = $d.wrapping_add(t1);
            $h = t1.wrapping_add(t2);
        }};
    }

    let mut base = 0;
    while base < 80 {
        R!(a, b, c, d, e, f, g, h, base);
        R!(h, a, b, c, d, e, f, g, base + 1);
        R!(g, h, a, b, c, d, e, f, base + 2);
        R!(f, g, h, a, b, c, d, e, base + 3);
        R!(e, f, g, h, a, b, c, d, base + 4);
        R!(d, e, f, g, h, a, b, c, base + 5);
        R!(c, d, e, f, g, h, a, b, base + 6);
        R!(b, c, d, e, f, g, h, a, base + 7);
        base += 8;
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
    state[5] = state[5].wrapping_add(f);
    state[6] = state[6].wrapping_add(g);
    state[7] = state[7].wrapping_add(h);
}
