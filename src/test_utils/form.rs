use scraper::{ElementRef, Html, Selector};

#[track_caller]
pub(crate) fn must_get_form(html: &Html) -> ElementRef<'_> {
    html.select(&Selector::parse("form").unwrap())
        .next()
        .expect("No form found")
}

#[track_caller]
pub(crate) fn assert_hx_endpoint(form: &ElementRef<'_>, endpoint: &str, attribute: &str) {
    let hx_endpoint = form
        .value()
        .attr(attribute)
        .unwrap_or_else(|| panic!("{attribute} attribute missing"));

    assert_eq!(
        hx_endpoint, endpoint,
        "want form with attribute {attribute}=\"{endpoint}\", got {hx_endpoint:?}"
    );
}

/// Assert the form has a required input called `name` of type `type_`.
#[track_caller]
pub(crate) fn assert_required_input(form: &ElementRef<'_>, name: &str, type_: &str) {
    let selector = Selector::parse(&format!("input[name={name}]")).unwrap();
    let input = form
        .select(&selector)
        .next()
        .unwrap_or_else(|| panic!("No input found with name \"{name}\""));

    let input_type = input.value().attr("type").unwrap_or_default();
    assert_eq!(
        input_type, type_,
        "want input {name} with type \"{type_}\", got {input_type:?}"
    );
    assert!(
        input.value().attr("required").is_some(),
        "want input with name {name} to have the required attribute but got none"
    );
}

/// The option values of the select called `name` and the value of the selected option.
#[track_caller]
pub(crate) fn select_options(form: &ElementRef<'_>, name: &str) -> (Vec<String>, Option<String>) {
    let select = Selector::parse(&format!("select[name={name}]")).unwrap();
    let option = Selector::parse("option").unwrap();
    let select = form
        .select(&select)
        .next()
        .unwrap_or_else(|| panic!("No select found with name \"{name}\""));

    let mut selected = None;
    let values = select
        .select(&option)
        .map(|option| {
            let value = option.value().attr("value").unwrap_or_default().to_owned();
            if option.value().attr("selected").is_some() {
                selected = Some(value.clone());
            }
            value
        })
        .collect();

    (values, selected)
}

#[track_caller]
pub(crate) fn assert_form_submit_button(form: &ElementRef<'_>, text: &str) {
    let submit_button = form
        .select(&Selector::parse("button[type=submit]").unwrap())
        .next()
        .expect("No submit button found");

    let got_text = submit_button.text().collect::<String>();
    assert_eq!(got_text.trim(), text);
}

/// The validation messages shown in the form, in document order.
pub(crate) fn form_error_messages(form: &ElementRef<'_>) -> Vec<String> {
    let error = Selector::parse("p.text-red-600").unwrap();

    form.select(&error)
        .map(|message| message.text().collect::<String>().trim().to_owned())
        .collect()
}
