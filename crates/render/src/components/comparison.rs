use utilidoc_core::ComparisonTable;

use crate::renderer::Context;

/// Renders a comparison table.
///
/// Rows are normalized to `columns.len() - 1` value cells: short rows are
/// padded with empty cells and extra values are dropped, so a malformed row
/// never shifts the table grid.
pub fn comparison_table(ctx: &mut Context, table: &ComparisonTable) {
    let value_columns = table.columns.len().saturating_sub(1);

    ctx.section("comparison", &table.title, |ctx| {
        ctx.open("table", "comparison-table");
        if !table.columns.is_empty() {
            ctx.push_raw("<thead><tr>");
            for column in &table.columns {
                ctx.push_raw("<th scope=\"col\">");
                ctx.push_text(column);
                ctx.push_raw("</th>");
            }
            ctx.push_raw("</tr></thead>");
        }

        ctx.push_raw("<tbody>");
        for row in &table.rows {
            if row.values.len() != value_columns {
                log::debug!(
                    "Comparison row '{}' has {} values for {} columns",
                    row.feature,
                    row.values.len(),
                    value_columns
                );
            }
            ctx.push_raw("<tr><th scope=\"row\">");
            ctx.push_text(&row.feature);
            ctx.push_raw("</th>");
            for i in 0..value_columns {
                ctx.push_raw("<td>");
                if let Some(value) = row.values.get(i) {
                    ctx.push_prose(value);
                }
                ctx.push_raw("</td>");
            }
            ctx.push_raw("</tr>");
        }
        ctx.push_raw("</tbody>");
        ctx.close("table");
    });
}
