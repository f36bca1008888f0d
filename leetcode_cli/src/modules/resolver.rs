use leetcode_cli_libs::leetcode::model::Problem;

/// 検索結果からの問題決定
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Selected(Problem),
    /// 複数の曖昧な候補。提示して絞り込んでもらう。エンジンは推測しない。
    Ambiguous(Vec<Problem>),
    Empty,
}

/// クエリと候補集合から対象の問題を決定する
///
/// ID かスラッグの完全一致は曖昧一致の数に関係なく常に勝つ。
/// id_filter は明示的な絞り込みであり、一致がなければ Empty を返す
/// (曖昧一致への格下げはしない)。
pub fn resolve(query: &str, id_filter: Option<&str>, candidates: Vec<Problem>) -> Resolution {
    let mut candidates = match id_filter {
        Some(id) => {
            let filtered: Vec<Problem> = candidates
                .into_iter()
                .filter(|candidate| candidate.question_frontend_id == id)
                .collect();
            if filtered.is_empty() {
                return Resolution::Empty;
            }
            filtered
        }
        None => candidates,
    };

    if candidates.is_empty() {
        return Resolution::Empty;
    }

    if let Some(exact) = candidates
        .iter()
        .find(|candidate| {
            candidate.question_frontend_id == query || candidate.title_slug == query
        })
        .cloned()
    {
        return Resolution::Selected(exact);
    }

    if candidates.len() == 1 {
        return Resolution::Selected(candidates.remove(0));
    }

    Resolution::Ambiguous(candidates)
}

#[cfg(test)]
mod test {
    use super::*;
    use leetcode_cli_libs::leetcode::model::Difficulty;

    fn problem(id: &str, slug: &str) -> Problem {
        Problem {
            question_frontend_id: String::from(id),
            title: String::from(slug),
            translated_title: None,
            title_slug: String::from(slug),
            difficulty: Difficulty::Easy,
            status: None,
            paid_only: false,
        }
    }

    #[test]
    fn test_exact_slug_overrides_fuzzy_candidates() {
        let candidates = vec![problem("1", "two-sum"), problem("2", "two-sum-ii")];
        match resolve("two-sum", None, candidates) {
            Resolution::Selected(selected) => {
                assert_eq!(selected.question_frontend_id, "1");
            }
            other => panic!("expected Selected, got {:?}", other),
        }
    }

    #[test]
    fn test_exact_id_overrides_fuzzy_candidates() {
        let candidates = vec![problem("1", "two-sum"), problem("2", "two-sum-ii")];
        match resolve("2", None, candidates) {
            Resolution::Selected(selected) => {
                assert_eq!(selected.title_slug, "two-sum-ii");
            }
            other => panic!("expected Selected, got {:?}", other),
        }
    }

    #[test]
    fn test_no_exact_match_is_ambiguous_in_input_order() {
        let candidates = vec![problem("1", "two-sum"), problem("2", "two-sum-ii")];
        match resolve("sum", None, candidates) {
            Resolution::Ambiguous(list) => {
                assert_eq!(list.len(), 2);
                assert_eq!(list[0].question_frontend_id, "1");
                assert_eq!(list[1].question_frontend_id, "2");
            }
            other => panic!("expected Ambiguous, got {:?}", other),
        }
    }

    #[test]
    fn test_single_candidate_is_auto_selected() {
        let candidates = vec![problem("42", "trapping-rain-water")];
        match resolve("rain", None, candidates) {
            Resolution::Selected(selected) => {
                assert_eq!(selected.question_frontend_id, "42");
            }
            other => panic!("expected Selected, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_candidates() {
        assert_eq!(resolve("anything", None, Vec::new()), Resolution::Empty);
    }

    #[test]
    fn test_id_filter_narrows_candidates() {
        let candidates = vec![problem("1", "two-sum"), problem("2", "two-sum-ii")];
        match resolve("sum", Some("2"), candidates) {
            Resolution::Selected(selected) => {
                assert_eq!(selected.title_slug, "two-sum-ii");
            }
            other => panic!("expected Selected, got {:?}", other),
        }
    }

    #[test]
    fn test_id_filter_without_match_is_empty_not_ambiguous() {
        let candidates = vec![problem("1", "two-sum"), problem("2", "two-sum-ii")];
        assert_eq!(resolve("sum", Some("999"), candidates), Resolution::Empty);
    }
}
