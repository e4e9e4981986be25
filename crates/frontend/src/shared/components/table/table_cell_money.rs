//! Компонент ячейки таблицы для денежных значений
//!
//! ```text
//! <TableCellMoney value=product.price />
//! ```

use super::number_format::format_rupiah;
use leptos::prelude::*;

/// Table cell rendering an amount in rupiah, right-aligned.
#[component]
pub fn TableCellMoney(
    /// Amount in the smallest currency unit
    value: i64,
) -> impl IntoView {
    view! {
        <td class="table__cell table__cell--money">
            {format_rupiah(value)}
        </td>
    }
}
