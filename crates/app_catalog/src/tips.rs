//! Tip calculator utility window.

use leptos::*;

/// Tip amount for a bill at the given percentage, rounded to cents.
pub fn tip_amount(bill: f64, percent: f64) -> f64 {
    if !bill.is_finite() || !percent.is_finite() || bill <= 0.0 || percent < 0.0 {
        return 0.0;
    }
    (bill * percent / 100.0 * 100.0).round() / 100.0
}

/// Bill total including tip, rounded to cents.
pub fn tip_total(bill: f64, percent: f64) -> f64 {
    if !bill.is_finite() || bill <= 0.0 {
        return 0.0;
    }
    ((bill + tip_amount(bill, percent)) * 100.0).round() / 100.0
}

#[component]
/// Bill and percentage inputs with a live tip/total readout.
pub fn TipCalculator() -> impl IntoView {
    let bill_input = create_rw_signal("50.00".to_string());
    let percent_input = create_rw_signal("20".to_string());

    let parsed = Signal::derive(move || {
        let bill = bill_input.get().trim().parse::<f64>().unwrap_or(0.0);
        let percent = percent_input.get().trim().parse::<f64>().unwrap_or(0.0);
        (bill, percent)
    });
    let tip = Signal::derive(move || {
        let (bill, percent) = parsed.get();
        tip_amount(bill, percent)
    });
    let total = Signal::derive(move || {
        let (bill, percent) = parsed.get();
        tip_total(bill, percent)
    });

    view! {
        <div class="application-content tip-calculator">
            <div class="content-header">
                <h2>"Tip Calculator"</h2>
            </div>
            <label class="tip-field">
                <span>"Bill amount"</span>
                <input
                    type="number"
                    min="0"
                    step="0.01"
                    inputmode="decimal"
                    prop:value=move || bill_input.get()
                    on:input=move |ev| bill_input.set(event_target_value(&ev))
                />
            </label>
            <label class="tip-field">
                <span>"Tip percent"</span>
                <input
                    type="number"
                    min="0"
                    step="1"
                    inputmode="numeric"
                    prop:value=move || percent_input.get()
                    on:input=move |ev| percent_input.set(event_target_value(&ev))
                />
            </label>
            <dl class="tip-readout">
                <dt>"Tip"</dt>
                <dd>{move || format!("${:.2}", tip.get())}</dd>
                <dt>"Total"</dt>
                <dd>{move || format!("${:.2}", total.get())}</dd>
            </dl>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn tip_math_rounds_to_cents() {
        assert_eq!(tip_amount(50.0, 20.0), 10.0);
        assert_eq!(tip_total(50.0, 20.0), 60.0);
        assert_eq!(tip_amount(19.99, 18.0), 3.6);
        assert_eq!(tip_total(19.99, 18.0), 23.59);
    }

    #[test]
    fn degenerate_inputs_yield_zero_instead_of_nonsense() {
        assert_eq!(tip_amount(0.0, 20.0), 0.0);
        assert_eq!(tip_amount(-5.0, 20.0), 0.0);
        assert_eq!(tip_amount(50.0, -10.0), 0.0);
        assert_eq!(tip_amount(f64::NAN, 20.0), 0.0);
        assert_eq!(tip_total(f64::INFINITY, 20.0), 0.0);
    }
}
