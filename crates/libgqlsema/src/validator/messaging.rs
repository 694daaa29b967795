const MAX_LIST_ITEMS: usize = 5;
/// Shortest name a containment match may hinge on. Anything shorter would
/// match most options by a single shared letter.
const MIN_CONTAINED_LEN: usize = 3;

/// Given `[A, B, C]` return `"A", "B", or "C"`.
pub(crate) fn quoted_or_list(items: &[impl AsRef<str>]) -> String {
    let quoted: Vec<String> = items.iter()
        .map(|item| format!("\"{}\"", item.as_ref()))
        .collect();
    or_list(&quoted)
}

/// Given `[A, B, C]` return `A, B, or C`. At most five items are listed.
pub(crate) fn or_list(items: &[impl AsRef<str>]) -> String {
    let items = &items[..items.len().min(MAX_LIST_ITEMS)];
    let mut out = String::new();
    for (idx, item) in items.iter().enumerate() {
        if idx > 0 {
            if items.len() > 2 {
                out.push(',');
            }
            out.push(' ');
            if idx == items.len() - 1 {
                out.push_str("or ");
            }
        }
        out.push_str(item.as_ref());
    }
    out
}

/// The `options` close enough to `input` to be worth suggesting, closest
/// first.
///
/// An option qualifies if its edit distance from `input` is at most 40% of
/// `input`'s length, or if it contains (or is contained by) `input` and the
/// shorter of the two is at least three characters long. Options that
/// differ from `input` only by case rank as distance 1.
pub(crate) fn suggestion_list<'o>(
    input: &str,
    options: impl IntoIterator<Item = &'o str>,
) -> Vec<String> {
    let threshold = (input.len() as f64 * 0.4).floor() as usize + 1;
    let input_lower = input.to_lowercase();

    let mut ranked: Vec<(usize, &str)> = options.into_iter()
        .filter_map(|option| {
            let option_lower = option.to_lowercase();
            let distance = if option_lower == input_lower {
                1
            } else {
                strsim::levenshtein(&input_lower, &option_lower)
            };
            let contains = input_lower.len().min(option_lower.len()) >= MIN_CONTAINED_LEN
                && (option_lower.contains(&input_lower)
                    || input_lower.contains(&option_lower));
            (distance <= threshold || contains).then_some((distance, option))
        })
        .collect();
    ranked.sort_by(|(a_dist, a_name), (b_dist, b_name)| {
        a_dist.cmp(b_dist).then_with(|| a_name.cmp(b_name))
    });
    ranked.into_iter().map(|(_, option)| option.to_string()).collect()
}
