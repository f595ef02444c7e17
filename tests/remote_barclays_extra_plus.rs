//! Live tests against the Barclays ePDQ test environment
//!
//! All tests are ignored by default. To run them, copy
//! `tests/fixtures/barclays_extra_plus.example.toml` to
//! `tests/fixtures/barclays_extra_plus.toml` (or point
//! `BARCLAYS_EXTRA_PLUS_FIXTURES` at another file), fill in a test account
//! and run `cargo test -- --ignored`.
//!
//! Some scenarios need account settings first:
//! - The signature tests need the matching hash algorithm under
//!   "Technical information / Global security parameters"
//! - The USD tests need USD enabled under "Account / Currencies"
//! - The 3-D Secure test needs 3-D Secure enabled by Barclays

#[cfg(test)]
mod tests {
    use ogone_directlink::core::request::generate_order_id;
    use ogone_directlink::{
        Address, BarclaysExtraPlusGateway, CreditCard, CreditTarget, GatewayConfig,
        PaymentSource, SignatureEncryptor, TransactionOptions,
    };
    use rstest::rstest;
    use std::time::{SystemTime, UNIX_EPOCH};

    const SUCCESS_MESSAGE: &str = "The transaction was successful";
    const AMOUNT: u64 = 100;

    fn fixtures() -> GatewayConfig {
        let path = std::env::var("BARCLAYS_EXTRA_PLUS_FIXTURES")
            .unwrap_or_else(|_| "tests/fixtures/barclays_extra_plus.toml".to_string());
        GatewayConfig::from_file(&path)
            .unwrap_or_else(|err| panic!("Failed to load fixtures from {}: {}", path, err))
    }

    fn gateway() -> BarclaysExtraPlusGateway {
        BarclaysExtraPlusGateway::new(fixtures()).unwrap()
    }

    fn card(number: &str) -> CreditCard {
        CreditCard::new("Longbob", "Longsen", number, 9, 2030).with_verification_value("123")
    }

    fn credit_card() -> PaymentSource {
        card("4111111111111111").into()
    }

    fn address() -> Address {
        Address {
            name: Some("Jim Smith".to_string()),
            address1: Some("1234 My Street".to_string()),
            address2: Some("Apt 1".to_string()),
            city: Some("Ottawa".to_string()),
            state: Some("ON".to_string()),
            zip: Some("K1C2N6".to_string()),
            country: Some("CA".to_string()),
            phone: Some("(555)555-5555".to_string()),
        }
    }

    fn options() -> TransactionOptions {
        TransactionOptions::new()
            .with_order_id(generate_order_id())
            .with_billing_address(address())
            .with_description("Store Purchase")
            .with_currency("GBP")
    }

    fn timestamped_order_id(suffix: &str) -> String {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();
        format!("{}{}", now, suffix)
    }

    #[test]
    #[ignore = "requires Barclays test account"]
    fn test_successful_purchase() {
        let options = options();
        let response = gateway().purchase(AMOUNT, &credit_card(), &options).unwrap();

        assert!(response.success);
        assert_eq!(response.message, SUCCESS_MESSAGE);
        assert_eq!(response.param("currency"), Some("GBP"));
        assert_eq!(response.order_id(), options.order_id.as_deref());
    }

    #[rstest]
    #[case::latin("Rémy", "Fröåïør")]
    #[case::mixed_scripts("ワタシ", "ёжзийклмнопрсуфхцч")]
    #[ignore = "requires Barclays test account"]
    fn test_successful_purchase_with_utf8_names(#[case] first: &str, #[case] last: &str) {
        let source = CreditCard::new(first, last, "4000100011112224", 9, 2030)
            .with_verification_value("123")
            .into();

        let response = gateway().purchase(AMOUNT, &source, &options()).unwrap();

        assert!(response.success);
        assert_eq!(response.message, SUCCESS_MESSAGE);
    }

    #[rstest]
    #[case::sha1(SignatureEncryptor::Sha1)]
    #[case::sha256(SignatureEncryptor::Sha256)]
    #[case::sha512(SignatureEncryptor::Sha512)]
    #[ignore = "requires the matching hash algorithm on the account"]
    fn test_successful_purchase_with_signature_encryptor(#[case] encryptor: SignatureEncryptor) {
        let mut config = fixtures();
        config.signature_encryptor = Some(encryptor);
        let gateway = BarclaysExtraPlusGateway::new(config).unwrap();

        let response = gateway.purchase(AMOUNT, &credit_card(), &options()).unwrap();

        assert!(response.success);
        assert_eq!(response.message, SUCCESS_MESSAGE);
    }

    #[test]
    #[ignore = "requires 3-D Secure on the account"]
    fn test_successful_purchase_with_3d_secure() {
        let source = card("4000000000000002").with_verification_value("111").into();

        let response = gateway()
            .purchase(AMOUNT, &source, &options().with_d3d())
            .unwrap();

        assert!(response.success);
        assert_eq!(response.param("STATUS"), Some("46"));
        assert_eq!(response.message, SUCCESS_MESSAGE);
        assert!(response.param("HTML_ANSWER").is_some());
    }

    #[test]
    #[ignore = "requires Barclays test account"]
    fn test_successful_with_non_numeric_order_id() {
        let mut order_id = generate_order_id();
        order_id.truncate(26);
        let options = options().with_order_id(format!("#{}.12", order_id));

        let response = gateway().purchase(AMOUNT, &credit_card(), &options).unwrap();

        assert!(response.success);
        assert_eq!(response.message, SUCCESS_MESSAGE);
    }

    #[test]
    #[ignore = "requires Barclays test account"]
    fn test_successful_purchase_without_explicit_order_id() {
        let mut options = options();
        options.order_id = None;

        let response = gateway().purchase(AMOUNT, &credit_card(), &options).unwrap();

        assert!(response.success);
        assert_eq!(response.message, SUCCESS_MESSAGE);
    }

    #[test]
    #[ignore = "requires Barclays test account"]
    fn test_successful_purchase_with_custom_eci() {
        let response = gateway()
            .purchase(AMOUNT, &credit_card(), &options().with_eci(4))
            .unwrap();

        assert!(response.success);
        assert_eq!(response.message, SUCCESS_MESSAGE);
    }

    #[test]
    #[ignore = "requires USD on the account"]
    fn test_successful_purchase_with_custom_currency_at_the_gateway_level() {
        let gateway = BarclaysExtraPlusGateway::new(fixtures().with_currency("USD")).unwrap();

        let response = gateway
            .purchase(AMOUNT, &credit_card(), &TransactionOptions::new())
            .unwrap();

        assert!(response.success);
        assert_eq!(response.message, SUCCESS_MESSAGE);
        assert_eq!(response.param("currency"), Some("USD"));
    }

    #[test]
    #[ignore = "requires USD on the account"]
    fn test_successful_purchase_with_custom_currency() {
        let gateway = BarclaysExtraPlusGateway::new(fixtures().with_currency("EUR")).unwrap();

        let response = gateway
            .purchase(AMOUNT, &credit_card(), &options().with_currency("USD"))
            .unwrap();

        assert!(response.success);
        assert_eq!(response.message, SUCCESS_MESSAGE);
        assert_eq!(response.param("currency"), Some("USD"));
    }

    #[test]
    #[ignore = "requires Barclays test account"]
    fn test_unsuccessful_purchase() {
        let declined = card("4111113333333333").into();

        let response = gateway().purchase(AMOUNT, &declined, &options()).unwrap();

        assert!(!response.success);
        assert_eq!(response.message, "Card refused");
    }

    #[rstest]
    #[case::default_eci(None)]
    #[case::custom_eci(Some(4))]
    #[ignore = "requires Barclays test account"]
    fn test_authorize_and_capture(#[case] eci: Option<u8>) {
        let gateway = gateway();
        let mut options = options();
        options.eci = eci;

        let auth = gateway.authorize(AMOUNT, &credit_card(), &options).unwrap();
        assert!(auth.success);
        assert_eq!(auth.message, SUCCESS_MESSAGE);
        assert!(!auth.authorization.reference().is_empty());

        let capture = gateway
            .capture(AMOUNT, auth.authorization.as_str(), &options)
            .unwrap();
        assert!(capture.success);
    }

    #[test]
    #[ignore = "requires Barclays test account"]
    fn test_unsuccessful_capture() {
        let response = gateway()
            .capture(AMOUNT, "", &TransactionOptions::new())
            .unwrap();

        assert!(!response.success);
        assert_eq!(response.message, "No card no, no exp date, no brand");
    }

    #[test]
    #[ignore = "requires Barclays test account"]
    fn test_successful_void() {
        let gateway = gateway();

        let auth = gateway.authorize(AMOUNT, &credit_card(), &options()).unwrap();
        assert!(auth.success);
        assert_eq!(auth.message, SUCCESS_MESSAGE);

        let void = gateway.void(auth.authorization.as_str()).unwrap();
        assert!(void.success);
    }

    #[test]
    #[ignore = "requires Barclays test account"]
    fn test_successful_store() {
        let gateway = gateway();

        let response = gateway
            .store(&credit_card(), &TransactionOptions::new().with_billing_id("test_alias"))
            .unwrap();
        assert!(response.success);

        let purchase = gateway
            .purchase(AMOUNT, &"test_alias".into(), &TransactionOptions::new())
            .unwrap();
        assert!(purchase.success);
    }

    #[test]
    #[ignore = "requires Barclays test account"]
    fn test_successful_store_generated_alias() {
        let gateway = gateway();

        let response = gateway
            .store(&credit_card(), &TransactionOptions::new())
            .unwrap();
        assert!(response.success);
        let alias = response.billing_id().expect("provider should return an alias");

        let purchase = gateway
            .purchase(AMOUNT, &alias.into(), &TransactionOptions::new())
            .unwrap();
        assert!(purchase.success);
    }

    #[test]
    #[ignore = "requires Barclays test account"]
    fn test_successful_referenced_credit() {
        let gateway = gateway();
        let options = options();

        let purchase = gateway.purchase(AMOUNT, &credit_card(), &options).unwrap();
        assert!(purchase.success);

        let target = CreditTarget::from(purchase.authorization.clone());
        let credit = gateway.credit(AMOUNT, &target, &options).unwrap();
        assert!(credit.success);
        assert!(!credit.authorization.as_str().is_empty());
        assert_eq!(credit.message, SUCCESS_MESSAGE);
    }

    #[test]
    #[ignore = "requires Barclays test account"]
    fn test_unsuccessful_referenced_credit() {
        let gateway = gateway();
        let options = options();

        let purchase = gateway.purchase(AMOUNT, &credit_card(), &options).unwrap();
        assert!(purchase.success);

        let target = CreditTarget::from(purchase.authorization.clone());
        let credit = gateway.credit(AMOUNT + 1, &target, &options).unwrap();
        assert!(!credit.success);
        assert!(!credit.authorization.as_str().is_empty());
        assert_eq!(credit.message, "Overflow in refunds requests");
    }

    #[test]
    #[ignore = "requires Barclays test account"]
    fn test_successful_unreferenced_credit() {
        let target = CreditTarget::from(card("4111111111111111"));

        let credit = gateway().credit(AMOUNT, &target, &options()).unwrap();

        assert!(credit.success);
        assert!(!credit.authorization.as_str().is_empty());
        assert_eq!(credit.message, SUCCESS_MESSAGE);
    }

    #[test]
    #[ignore = "requires Barclays test account"]
    fn test_reference_transactions() {
        let gateway = gateway();

        // Setting an alias
        let response = gateway
            .purchase(
                AMOUNT,
                &card("4000100011112224").into(),
                &options()
                    .with_billing_id("awesomeman")
                    .with_order_id(timestamped_order_id("1")),
            )
            .unwrap();
        assert!(response.success);

        // Updating an alias
        let response = gateway
            .purchase(
                AMOUNT,
                &credit_card(),
                &options()
                    .with_billing_id("awesomeman")
                    .with_order_id(timestamped_order_id("2")),
            )
            .unwrap();
        assert!(response.success);

        // Using an alias without the card
        let response = gateway
            .purchase(
                AMOUNT,
                &"awesomeman".into(),
                &options().with_order_id(timestamped_order_id("3")),
            )
            .unwrap();
        assert!(response.success);
    }

    #[test]
    #[ignore = "requires network access"]
    fn test_invalid_login() {
        let gateway = BarclaysExtraPlusGateway::new(GatewayConfig::new("", "", "")).unwrap();

        let response = gateway.purchase(AMOUNT, &credit_card(), &options()).unwrap();

        assert!(!response.success);
        assert_eq!(
            response.message,
            "Some of the data entered is incorrect. please retry."
        );
    }
}
