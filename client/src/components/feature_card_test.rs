use super::*;

#[test]
fn gradients_are_distinct_tailwind_pairs() {
    let all = [FeatureTint::Blue, FeatureTint::Purple, FeatureTint::Green];
    for (i, a) in all.iter().enumerate() {
        assert!(a.gradient().starts_with("from-"));
        assert!(a.gradient().contains(" to-"));
        for b in &all[i + 1..] {
            assert_ne!(a.gradient(), b.gradient());
        }
    }
}
