/// Trader nicknames the normalizer never touches.
pub const EXCLUDED_TRADER_NICKNAMES: [&str; 2] = ["caretaker", "Unknown"];

/// Item template of the rouble stack in the stock game data
pub const DEFAULT_ROUBLES_TPL: &str = "5449016a4bdc2d6f028b456f";

/// Item template of the dollar stack in the stock game data
pub const DEFAULT_DOLLARS_TPL: &str = "5696686a4bdc2da3298b456a";

/// Item template of the euro stack in the stock game data
pub const DEFAULT_EUROS_TPL: &str = "569668774bdc2da2298b4568";
