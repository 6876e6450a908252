/// Iterative Heap's algorithm over the characters of a string.
/// Produces exactly `n!` arrangements for an `n`-character input, repeats included,
/// each one a single swap away from the previous.
///
/// # Example
/// ```
/// use recursive_algos::cs::combinatorial::permute_iterative;
///
/// let perms = permute_iterative("abc");
/// assert_eq!(perms, vec!["abc", "bac", "cab", "acb", "bca", "cba"]);
/// ```
pub fn permute_iterative(input: &str) -> Vec<String> {
    let mut elements: Vec<char> = input.chars().collect();
    let n = elements.len();
    // c[i] counts the swaps already performed at level i.
    let mut counters = vec![0usize; n];

    let mut result = Vec::new();
    result.push(elements.iter().collect::<String>());

    let mut i = 0;
    while i < n {
        if counters[i] < i {
            if i % 2 == 0 {
                elements.swap(0, i);
            } else {
                elements.swap(counters[i], i);
            }
            result.push(elements.iter().collect());
            counters[i] += 1;
            i = 0;
        } else {
            counters[i] = 0;
            i += 1;
        }
    }

    result
}
