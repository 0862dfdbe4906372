macro_rules! object_catalogue {
	($($kind:ident => $discriminator:literal as $type_name:literal { $($field:literal),* $(,)? })*) => {
		/// One supported API object kind, keyed on the wire by its `object` discriminator.
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
		pub enum ObjectKind {
			$(
				#[doc = concat!("`", $discriminator, "` records, converted to `", $type_name, "`.")]
				$kind,
			)*
		}

		impl ObjectKind {
			/// Every kind, in catalogue order.
			pub const ALL: &'static [ObjectKind] = &[$(ObjectKind::$kind),*];

			/// Wire discriminator string for this kind.
			pub const fn discriminator(self) -> &'static str {
				match self {
					$(ObjectKind::$kind => $discriminator,)*
				}
			}

			/// Target type name for this kind.
			pub const fn type_name(self) -> &'static str {
				match self {
					$(ObjectKind::$kind => $type_name,)*
				}
			}

			/// Declared field names, in declaration order. The discriminator is implicit.
			pub const fn fields(self) -> &'static [&'static str] {
				match self {
					$(ObjectKind::$kind => &[$($field),*],)*
				}
			}
		}
	};
}

object_catalogue! {
	Account => "account" as "Account" {
		"id", "business_profile", "business_type", "capabilities", "charges_enabled", "company", "controller", "country", "created",
		"default_currency", "deleted", "details_submitted", "email", "external_accounts", "future_requirements", "individual", "metadata",
		"payouts_enabled", "requirements", "settings", "tos_acceptance", "type",
	}
	AccountLink => "account_link" as "AccountLink" {
		"created", "expires_at", "url",
	}
	ApplicationFee => "application_fee" as "ApplicationFee" {
		"id", "account", "amount", "amount_refunded", "application", "balance_transaction", "charge", "created", "currency", "livemode",
		"originating_transaction", "refunded", "refunds",
	}
	FeeRefund => "fee_refund" as "FeeRefund" {
		"id", "amount", "balance_transaction", "created", "currency", "fee", "metadata",
	}
	Balance => "balance" as "Balance" {
		"available", "connect_reserved", "instant_available", "issuing", "livemode", "pending",
	}
	BalanceTransaction => "balance_transaction" as "BalanceTransaction" {
		"id", "amount", "available_on", "created", "currency", "description", "exchange_rate", "fee", "fee_details", "net",
		"reporting_category", "source", "status", "type",
	}
	BankAccount => "bank_account" as "BankAccount" {
		"id", "account", "account_holder_name", "account_holder_type", "account_type", "available_payout_methods", "bank_name", "country",
		"currency", "customer", "default_for_currency", "deleted", "fingerprint", "last4", "metadata", "routing_number", "status",
	}
	BillingPortalSession => "billing_portal.session" as "BillingPortal::Session" {
		"id", "configuration", "created", "customer", "flow", "livemode", "locale", "on_behalf_of", "return_url", "url",
	}
	Capability => "capability" as "Capability" {
		"id", "account", "future_requirements", "requested", "requested_at", "requirements", "status",
	}
	Card => "card" as "Card" {
		"id", "account", "address_city", "address_country", "address_line1", "address_line1_check", "address_line2", "address_state",
		"address_zip", "address_zip_check", "available_payout_methods", "brand", "country", "currency", "customer", "cvc_check",
		"default_for_currency", "deleted", "dynamic_last4", "exp_month", "exp_year", "fingerprint", "funding", "last4", "metadata", "name",
		"recipient", "tokenization_method",
	}
	Charge => "charge" as "Charge" {
		"id", "amount", "amount_captured", "amount_refunded", "application", "application_fee", "application_fee_amount",
		"balance_transaction", "billing_details", "calculated_statement_descriptor", "captured", "created", "currency", "customer",
		"description", "dispute", "disputed", "failure_code", "failure_message", "fraud_details", "invoice", "livemode", "metadata",
		"on_behalf_of", "order", "outcome", "paid", "payment_intent", "payment_method", "payment_method_details", "receipt_email",
		"receipt_number", "receipt_url", "refunded", "refunds", "review", "shipping", "source", "source_transfer", "statement_descriptor",
		"statement_descriptor_suffix", "status", "transfer", "transfer_data", "transfer_group",
	}
	CheckoutSession => "checkout.session" as "Checkout::Session" {
		"id", "allow_promotion_codes", "amount_subtotal", "amount_total", "billing_address_collection", "cancel_url", "client_reference_id",
		"currency", "customer", "customer_details", "customer_email", "line_items", "livemode", "locale", "metadata", "mode",
		"payment_intent", "payment_method_options", "payment_method_types", "payment_status", "setup_intent", "shipping",
		"shipping_address_collection", "status", "submit_type", "subscription", "success_url", "total_details", "url",
	}
	CountrySpec => "country_spec" as "CountrySpec" {
		"id", "default_currency", "supported_bank_account_currencies", "supported_payment_currencies", "supported_payment_methods",
		"supported_transfer_countries", "verification_fields",
	}
	Coupon => "coupon" as "Coupon" {
		"id", "amount_off", "applies_to", "created", "currency", "deleted", "duration", "duration_in_months", "livemode", "max_redemptions",
		"metadata", "name", "percent_off", "redeem_by", "times_redeemed", "valid",
	}
	CreditNote => "credit_note" as "CreditNote" {
		"id", "amount", "created", "currency", "customer", "customer_balance_transaction", "discount_amount", "discount_amounts", "invoice",
		"lines", "livemode", "memo", "metadata", "number", "out_of_band_amount", "pdf", "reason", "refund", "status", "subtotal",
		"tax_amounts", "total", "type", "voided_at",
	}
	CreditNoteLineItem => "credit_note_line_item" as "CreditNoteLineItem" {
		"id", "amount", "description", "discount_amount", "discount_amounts", "invoice_line_item", "livemode", "quantity", "tax_amounts",
		"tax_rates", "type", "unit_amount", "unit_amount_decimal",
	}
	Customer => "customer" as "Customer" {
		"id", "address", "balance", "created", "currency", "default_source", "deleted", "delinquent", "description", "discount", "email",
		"invoice_prefix", "invoice_settings", "livemode", "metadata", "name", "next_invoice_sequence", "phone", "preferred_locales",
		"shipping", "sources", "subscriptions", "tax", "tax_exempt", "tax_ids", "test_clock",
	}
	CustomerBalanceTransaction => "customer_balance_transaction" as "CustomerBalanceTransaction" {
		"id", "amount", "created", "credit_note", "currency", "customer", "description", "ending_balance", "invoice", "livemode",
		"metadata", "type",
	}
	Discount => "discount" as "Discount" {
		"id", "checkout_session", "coupon", "customer", "deleted", "end", "invoice", "invoice_item", "promotion_code", "start",
		"subscription",
	}
	Dispute => "dispute" as "Dispute" {
		"id", "amount", "balance_transactions", "charge", "created", "currency", "evidence", "evidence_details", "is_charge_refundable",
		"livemode", "metadata", "payment_intent", "reason", "status",
	}
	EphemeralKey => "ephemeral_key" as "EphemeralKey" {
		"id", "associated_objects", "created", "expires", "livemode", "secret",
	}
	Event => "event" as "Event" {
		"id", "account", "api_version", "created", "data", "livemode", "pending_webhooks", "request", "type",
	}
	ExternalAccount => "external_account" as "ExternalAccount" {
		"id", "account", "account_holder_name", "account_holder_type", "bank_name", "country", "currency", "default_for_currency", "deleted",
		"fingerprint", "last4", "metadata", "routing_number", "status",
	}
	File => "file" as "File" {
		"id", "created", "expires_at", "filename", "links", "purpose", "size", "title", "type", "url",
	}
	FileLink => "file_link" as "FileLink" {
		"id", "created", "expired", "expires_at", "file", "livemode", "metadata", "url",
	}
	IdentityVerificationSession => "identity.verification_session" as "Identity::VerificationSession" {
		"id", "client_secret", "created", "last_error", "last_verification_report", "livemode", "metadata", "options", "redaction", "status",
		"type", "url", "verified_outputs",
	}
	Invoice => "invoice" as "Invoice" {
		"id", "account_country", "account_name", "amount_due", "amount_paid", "amount_remaining", "application_fee_amount", "attempt_count",
		"attempted", "auto_advance", "automatic_tax", "billing_reason", "charge", "collection_method", "created", "currency",
		"custom_fields", "customer", "customer_address", "customer_email", "customer_name", "customer_phone", "customer_shipping",
		"customer_tax_exempt", "customer_tax_ids", "default_payment_method", "default_source", "default_tax_rates", "description",
		"discount", "discounts", "due_date", "ending_balance", "footer", "hosted_invoice_url", "invoice_pdf", "last_finalization_error",
		"lines", "livemode", "metadata", "next_payment_attempt", "number", "paid", "payment_intent", "period_end", "period_start",
		"post_payment_credit_notes_amount", "pre_payment_credit_notes_amount", "receipt_number", "starting_balance", "statement_descriptor",
		"status", "status_transitions", "subscription", "subscription_proration_date", "subtotal", "tax", "total", "total_discount_amounts",
		"total_tax_amounts", "transfer_data", "webhooks_delivered_at",
	}
	Invoiceitem => "invoiceitem" as "Invoiceitem" {
		"id", "amount", "currency", "customer", "date", "deleted", "description", "discountable", "discounts", "invoice", "livemode",
		"metadata", "period", "price", "proration", "quantity", "subscription", "subscription_item", "tax_rates", "unit_amount",
		"unit_amount_decimal",
	}
	IssuingAuthorization => "issuing.authorization" as "Issuing::Authorization" {
		"id", "amount", "amount_details", "approved", "authorization_method", "balance_transactions", "card", "cardholder", "created",
		"currency", "livemode", "merchant_amount", "merchant_currency", "merchant_data", "metadata", "pending_request", "request_history",
		"status", "transactions", "verification_data", "wallet",
	}
	IssuingCard => "issuing.card" as "Issuing::Card" {
		"id", "brand", "cancellation_reason", "cardholder", "created", "currency", "cvc", "exp_month", "exp_year", "last4", "livemode",
		"metadata", "number", "replaced_by", "replacement_for", "replacement_reason", "shipping", "spending_controls", "status", "type",
	}
	IssuingCardholder => "issuing.cardholder" as "Issuing::Cardholder" {
		"id", "billing", "company", "created", "email", "individual", "livemode", "metadata", "name", "phone_number", "requirements",
		"spending_controls", "status", "type",
	}
	IssuingDispute => "issuing.dispute" as "Issuing::Dispute" {
		"id", "amount", "balance_transactions", "created", "currency", "evidence", "livemode", "metadata", "status", "transaction",
	}
	IssuingTransaction => "issuing.transaction" as "Issuing::Transaction" {
		"id", "amount", "authorization", "balance_transaction", "card", "cardholder", "created", "currency", "dispute", "livemode",
		"merchant_amount", "merchant_currency", "merchant_data", "metadata", "type",
	}
	LineItem => "line_item" as "LineItem" {
		"id", "amount", "amount_excluding_tax", "currency", "description", "discount_amounts", "discountable", "discounts", "invoice_item",
		"livemode", "metadata", "period", "price", "proration", "quantity", "subscription", "subscription_item", "tax_amounts", "tax_rates",
		"type",
	}
	List => "list" as "List" {
		"data", "has_more", "total_count", "url",
	}
	LoginLink => "login_link" as "LoginLink" {
		"created", "url",
	}
	Mandate => "mandate" as "Mandate" {
		"id", "customer_acceptance", "livemode", "multi_use", "payment_method", "payment_method_details", "single_use", "status", "type",
	}
	OAuth => "oauth" as "Connect::OAuth" {
		"access_token", "livemode", "refresh_token", "scope", "stripe_publishable_key", "stripe_user_id", "token_type",
	}
	Order => "order" as "Order" {
		"id", "amount", "amount_returned", "application", "application_fee", "charge", "created", "currency", "customer", "email",
		"external_coupon_code", "items", "livemode", "metadata", "returns", "selected_shipping_method", "shipping", "shipping_methods",
		"status", "status_transitions", "updated", "upstream_id",
	}
	OrderReturn => "order_return" as "OrderReturn" {
		"id", "amount", "created", "currency", "items", "livemode", "order", "refund",
	}
	PaymentIntent => "payment_intent" as "PaymentIntent" {
		"id", "amount", "amount_capturable", "amount_received", "application", "application_fee_amount", "automatic_payment_methods",
		"canceled_at", "cancellation_reason", "capture_method", "charges", "client_secret", "confirmation_method", "created", "currency",
		"customer", "description", "invoice", "last_payment_error", "latest_charge", "livemode", "metadata", "next_action", "on_behalf_of",
		"payment_method", "payment_method_options", "payment_method_types", "receipt_email", "review", "setup_future_usage", "shipping",
		"statement_descriptor", "statement_descriptor_suffix", "status", "transfer_data", "transfer_group",
	}
	PaymentLink => "payment_link" as "PaymentLink" {
		"id", "active", "after_completion", "allow_promotion_codes", "application_fee_amount", "automatic_tax", "billing_address_collection",
		"currency", "line_items", "livemode", "metadata", "payment_method_types", "url",
	}
	PaymentMethod => "payment_method" as "PaymentMethod" {
		"id", "au_becs_debit", "bacs_debit", "billing_details", "card", "card_present", "created", "customer", "ideal", "livemode",
		"metadata", "sepa_debit", "type", "us_bank_account",
	}
	Payout => "payout" as "Payout" {
		"id", "amount", "arrival_date", "automatic", "balance_transaction", "created", "currency", "description", "destination",
		"failure_balance_transaction", "failure_code", "failure_message", "livemode", "metadata", "method", "original_payout", "reversed_by",
		"source_type", "statement_descriptor", "status", "type",
	}
	Person => "person" as "Person" {
		"id", "account", "address", "created", "deleted", "dob", "email", "first_name", "gender", "id_number_provided", "last_name",
		"metadata", "nationality", "phone", "relationship", "requirements", "ssn_last_4_provided", "verification",
	}
	Plan => "plan" as "Plan" {
		"id", "active", "aggregate_usage", "amount", "amount_decimal", "billing_scheme", "created", "currency", "deleted", "interval",
		"interval_count", "livemode", "metadata", "nickname", "product", "tiers", "tiers_mode", "transform_usage", "trial_period_days",
		"usage_type",
	}
	Price => "price" as "Price" {
		"id", "active", "billing_scheme", "created", "currency", "custom_unit_amount", "deleted", "livemode", "lookup_key", "metadata",
		"nickname", "product", "recurring", "tax_behavior", "tiers", "tiers_mode", "transform_quantity", "type", "unit_amount",
		"unit_amount_decimal",
	}
	Product => "product" as "Product" {
		"id", "active", "created", "default_price", "deleted", "description", "images", "livemode", "metadata", "name",
		"package_dimensions", "shippable", "statement_descriptor", "tax_code", "unit_label", "updated", "url",
	}
	PromotionCode => "promotion_code" as "PromotionCode" {
		"id", "active", "code", "coupon", "created", "customer", "expires_at", "livemode", "max_redemptions", "metadata", "restrictions",
		"times_redeemed",
	}
	Quote => "quote" as "Quote" {
		"id", "amount_subtotal", "amount_total", "application_fee_amount", "collection_method", "computed", "created", "currency",
		"customer", "description", "discounts", "expires_at", "footer", "header", "invoice", "line_items", "livemode", "metadata", "number",
		"status", "subscription", "total_details",
	}
	RadarEarlyFraudWarning => "radar.early_fraud_warning" as "Radar::EarlyFraudWarning" {
		"id", "actionable", "charge", "created", "fraud_type", "livemode", "payment_intent",
	}
	Recipient => "recipient" as "Recipient" {
		"id", "active_account", "cards", "created", "default_card", "deleted", "description", "email", "livemode", "metadata", "migrated_to",
		"name", "rolled_back_from", "type",
	}
	Refund => "refund" as "Refund" {
		"id", "amount", "balance_transaction", "charge", "created", "currency", "description", "failure_balance_transaction",
		"failure_reason", "metadata", "payment_intent", "reason", "receipt_number", "source_transfer_reversal", "status",
		"transfer_reversal",
	}
	ReportingReportRun => "reporting.report_run" as "Reporting::ReportRun" {
		"id", "created", "error", "livemode", "parameters", "report_type", "result", "status", "succeeded_at",
	}
	Review => "review" as "Review" {
		"id", "billing_zip", "charge", "closed_reason", "created", "ip_address", "ip_address_location", "livemode", "open", "opened_reason",
		"payment_intent", "reason", "session",
	}
	SetupAttempt => "setup_attempt" as "SetupAttempt" {
		"id", "application", "created", "customer", "livemode", "on_behalf_of", "payment_method", "payment_method_details", "setup_error",
		"setup_intent", "status", "usage",
	}
	SetupIntent => "setup_intent" as "SetupIntent" {
		"id", "application", "cancellation_reason", "client_secret", "created", "customer", "description", "last_setup_error",
		"latest_attempt", "livemode", "mandate", "metadata", "next_action", "on_behalf_of", "payment_method", "payment_method_options",
		"payment_method_types", "single_use_mandate", "status", "usage",
	}
	ShippingRate => "shipping_rate" as "ShippingRate" {
		"id", "active", "created", "delivery_estimate", "display_name", "fixed_amount", "livemode", "metadata", "tax_behavior", "tax_code",
		"type",
	}
	Sku => "sku" as "Sku" {
		"id", "active", "attributes", "created", "currency", "deleted", "image", "inventory", "livemode", "metadata", "package_dimensions",
		"price", "product", "updated",
	}
	Source => "source" as "Source" {
		"id", "ach_credit_transfer", "ach_debit", "alipay", "amount", "bancontact", "card", "card_present", "client_secret",
		"code_verification", "created", "currency", "customer", "eps", "flow", "giropay", "ideal", "livemode", "metadata", "multibanco",
		"owner", "p24", "receiver", "redirect", "sepa_debit", "sofort", "statement_descriptor", "status", "three_d_secure", "type", "usage",
		"wechat",
	}
	Subscription => "subscription" as "Subscription" {
		"id", "application_fee_percent", "automatic_tax", "billing_cycle_anchor", "billing_thresholds", "cancel_at", "cancel_at_period_end",
		"canceled_at", "collection_method", "created", "current_period_end", "current_period_start", "customer", "days_until_due",
		"default_payment_method", "default_source", "default_tax_rates", "discount", "ended_at", "items", "latest_invoice", "livemode",
		"metadata", "next_pending_invoice_item_invoice", "pause_collection", "pending_invoice_item_interval", "pending_setup_intent",
		"pending_update", "plan", "quantity", "schedule", "start_date", "status", "test_clock", "transfer_data", "trial_end", "trial_start",
	}
	SubscriptionItem => "subscription_item" as "SubscriptionItem" {
		"id", "billing_thresholds", "created", "deleted", "metadata", "plan", "price", "quantity", "subscription", "tax_rates",
	}
	SubscriptionSchedule => "subscription_schedule" as "SubscriptionSchedule" {
		"id", "canceled_at", "completed_at", "created", "current_phase", "customer", "default_settings", "end_behavior", "livemode",
		"metadata", "phases", "released_at", "released_subscription", "status", "subscription",
	}
	TaxCode => "tax_code" as "TaxCode" {
		"id", "description", "name",
	}
	TaxId => "tax_id" as "TaxId" {
		"id", "country", "created", "customer", "deleted", "livemode", "type", "value", "verification",
	}
	TaxRate => "tax_rate" as "TaxRate" {
		"id", "active", "country", "created", "description", "display_name", "inclusive", "jurisdiction", "livemode", "metadata",
		"percentage", "state", "tax_type",
	}
	TerminalLocation => "terminal.location" as "Terminal::Location" {
		"id", "address", "configuration_overrides", "deleted", "display_name", "livemode", "metadata",
	}
	TerminalReader => "terminal.reader" as "Terminal::Reader" {
		"id", "action", "deleted", "device_sw_version", "device_type", "ip_address", "label", "livemode", "location", "metadata",
		"serial_number", "status",
	}
	Token => "token" as "Token" {
		"id", "bank_account", "card", "client_ip", "created", "livemode", "type", "used",
	}
	Topup => "topup" as "Topup" {
		"id", "amount", "balance_transaction", "created", "currency", "description", "expected_availability_date", "failure_code",
		"failure_message", "livemode", "metadata", "source", "statement_descriptor", "status", "transfer_group",
	}
	Transfer => "transfer" as "Transfer" {
		"id", "amount", "amount_reversed", "balance_transaction", "created", "currency", "description", "destination",
		"destination_payment", "livemode", "metadata", "reversals", "reversed", "source_transaction", "source_type", "transfer_group",
	}
	TransferReversal => "transfer_reversal" as "TransferReversal" {
		"id", "amount", "balance_transaction", "created", "currency", "destination_payment_refund", "metadata", "source_refund", "transfer",
	}
	UsageRecord => "usage_record" as "UsageRecord" {
		"id", "livemode", "quantity", "subscription_item", "timestamp",
	}
	UsageRecordSummary => "usage_record_summary" as "UsageRecordSummary" {
		"id", "invoice", "livemode", "period", "subscription_item", "total_usage",
	}
	WebhookEndpoint => "webhook_endpoint" as "WebhookEndpoint" {
		"id", "api_version", "application", "created", "deleted", "description", "enabled_events", "livemode", "metadata", "secret",
		"status", "url",
	}
}
