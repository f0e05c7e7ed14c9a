//! Full (non-truncated) convolution of 16-bit samples with filter weights.

/// Convolve a sample sequence with a filter-weight vector, producing a fresh
/// output of length `data.len() + filter.len() − 1`.
///
/// Numeric semantics are those of the fixed-point pipeline this feeds: each
/// per-tap product `data[i−j] * filter[j]` is computed in f32 and quantized
/// back to i16 *before* accumulation, and the i16 accumulator wraps on
/// overflow. Summing in full precision and quantizing once would give
/// materially different output for large filter gains.
///
/// Either input being empty yields an empty output.
pub fn convolve(data: &[i16], filter: &[f32]) -> Vec<i16> {
    if data.is_empty() || filter.is_empty() {
        return Vec::new();
    }

    let len = data.len() + filter.len() - 1;
    let mut result = Vec::with_capacity(len);

    for i in 0..len {
        let mut acc: i16 = 0;
        // j > i would index before the start of the data; i − j past the end
        // falls outside the data and contributes nothing.
        for (j, &weight) in filter.iter().enumerate().take(i + 1) {
            let k = i - j;
            if k >= data.len() {
                continue;
            }
            acc = acc.wrapping_add((data[k] as f32 * weight) as i16);
        }
        result.push(acc);
    }

    result
}
