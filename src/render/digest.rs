use super::RenderContext;
use crate::model::TrialRecord;

pub const MAX_LISTED: usize = 10;

/// Count sentence with the active query context, then the first
/// [`MAX_LISTED`] records as a numbered list.
pub fn render(records: &[TrialRecord], ctx: &RenderContext) -> String {
    let labelled = [
        ("molécula", Some(ctx.molecule.as_str())),
        ("patología", Some(ctx.pathology.as_str())),
        ("estado", ctx.criteria.status()),
        ("fase", ctx.criteria.phase()),
        ("ubicación", ctx.criteria.location()),
    ];
    let context: Vec<String> = labelled
        .into_iter()
        .filter_map(|(label, value)| {
            let value = value?.trim();
            (!value.is_empty()).then(|| format!("{} {}", label, value))
        })
        .collect();

    let mut out = format!("Se encontraron {} ensayos clínicos", records.len());
    if !context.is_empty() {
        out.push_str(" para ");
        out.push_str(&context.join(", "));
    }
    out.push('.');

    for (i, r) in records.iter().take(MAX_LISTED).enumerate() {
        out.push_str(&format!("\n{}. {} (ID: {})", i + 1, r.title, r.id));
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterCriteria;

    fn records(n: usize) -> Vec<TrialRecord> {
        (1..=n)
            .map(|i| TrialRecord {
                id: format!("NCT{:08}", i),
                title: format!("Trial {}", i),
                status: "ongoing".into(),
                phase: "unknown".into(),
                location: "unknown".into(),
            })
            .collect()
    }

    #[test]
    fn caps_list_but_reports_full_count() {
        let ctx = RenderContext {
            molecule: "metformin".into(),
            ..Default::default()
        };
        let text = render(&records(23), &ctx);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Se encontraron 23 ensayos clínicos para molécula metformin.");
        assert_eq!(lines.len(), 1 + MAX_LISTED);
        assert_eq!(lines[1], "1. Trial 1 (ID: NCT00000001)");
        assert_eq!(lines[10], "10. Trial 10 (ID: NCT00000010)");
    }

    #[test]
    fn context_in_fixed_order_skipping_empty() {
        let ctx = RenderContext {
            molecule: "semaglutide".into(),
            pathology: String::new(),
            criteria: FilterCriteria::new(Some("Ongoing"), Some("3"), Some("spain")),
        };
        let text = render(&records(1), &ctx);
        assert!(text.starts_with(
            "Se encontraron 1 ensayos clínicos para molécula semaglutide, estado ongoing, fase 3, ubicación spain."
        ));
    }

    #[test]
    fn zero_records() {
        let ctx = RenderContext {
            molecule: "zzz".into(),
            pathology: "rare".into(),
            ..Default::default()
        };
        let text = render(&[], &ctx);
        assert_eq!(
            text,
            "Se encontraron 0 ensayos clínicos para molécula zzz, patología rare.\n"
        );
    }
}
