use serde::{Deserialize, Serialize};

/// localStorage key holding the session token.
pub const TOKEN_STORAGE_KEY: &str = "prenota_session_token";

/// The claims carried in the session token. The server signs them at
/// login; the client decodes the payload for display and routing only.
/// Authorization is re-checked server-side on every call.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SessionClaims {
    pub sub: String, // User ID as string
    pub exp: usize,  // Expiration time
    pub user_id: i32,
    pub full_name: String,
    pub email: String,
    pub is_admin: bool,
}

/// Reads the session token from localStorage. None on the server and when
/// no token is stored.
pub fn read_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::prelude::*;

        #[wasm_bindgen]
        extern "C" {
            #[wasm_bindgen(js_namespace = localStorage)]
            fn getItem(key: &str) -> Option<String>;
        }

        if let Some(token) = getItem(TOKEN_STORAGE_KEY) {
            if !token.is_empty() {
                return Some(token);
            }
        }
    }

    None
}

pub fn store_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::prelude::*;

        #[wasm_bindgen]
        extern "C" {
            #[wasm_bindgen(js_namespace = localStorage)]
            fn setItem(key: &str, value: &str);
        }

        setItem(TOKEN_STORAGE_KEY, token);
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::prelude::*;

        #[wasm_bindgen]
        extern "C" {
            #[wasm_bindgen(js_namespace = localStorage)]
            fn removeItem(key: &str);
        }

        removeItem(TOKEN_STORAGE_KEY);
    }
}

/// Decodes the claims payload of a session token without verifying the
/// signature. Good enough for UI state; never treated as authorization.
pub fn decode_session_claims(token: &str) -> Option<SessionClaims> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return None;
    }

    // Decode the payload (second part)
    let payload = parts[1];

    // Add padding if needed for base64 decoding
    let padded_payload = match payload.len() % 4 {
        2 => format!("{}==", payload),
        3 => format!("{}=", payload),
        _ => payload.to_string(),
    };

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::prelude::*;

        #[wasm_bindgen]
        extern "C" {
            #[wasm_bindgen(js_name = atob)]
            fn base64_decode(data: &str) -> String;
        }

        if let Ok(decoded) = std::panic::catch_unwind(|| base64_decode(&padded_payload)) {
            if let Ok(claims) = serde_json::from_str::<SessionClaims>(&decoded) {
                return Some(claims);
            }
        }
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = padded_payload;
    }

    None
}
