pub mod core;
pub mod analysis;

/*
┌────────────────────────────────────────────────────────────────────────────┐
│                     PHONE-ANALYSIS STRUCT ARCHITECTURE                      │
└────────────────────────────────────────────────────────────────────────────┘

┌──────────────────────────────── CORE LAYER ────────────────────────────────┐
│                                                                             │
│  ┌──────────────────────────┐  ┌─────────────────────────────────────┐    │
│  │ struct PhoneConfig       │  │ struct Error                        │    │
│  │ • default_region: String │  │ • kind: ErrorKind  // Io, NotFound  │    │
│  │ • add_country_code: bool │  │ • context: String                   │    │
│  │ • add_extension: bool    │  └─────────────────────────────────────┘    │
│  │ • generate_ngrams: bool  │                                              │
│  │ • emit_raw_input: bool   │                                              │
│  └──────────────────────────┘                                              │
└─────────────────────────────────────────────────────────────────────────────┘

┌────────────────────────────── ANALYSIS LAYER ──────────────────────────────┐
│                                                                             │
│  ┌────────────────────────┐  ┌──────────────────────┐                      │
│  │ trait Tokenizer        │  │ struct Token         │                      │
│  │ • tokenize()           │  │ • text: String       │                      │
│  │ • name()               │  │ • position: u32      │                      │
│  │ • clone_box()          │  │ • offset: usize      │                      │
│  └────────────────────────┘  │ • token_type: Type   │                      │
│                              └──────────────────────┘                      │
│  ┌────────────────────────┐  ┌──────────────────────────────────────┐     │
│  │ struct Analyzer        │  │ struct AnalyzerRegistry              │     │
│  │ • tokenizer: Box<dyn>  │  │ • analyzers: RwLock<HashMap>         │     │
│  │ • analyze()            │  │ • "phone", "phone_ngram" defaults    │     │
│  └────────────────────────┘  └──────────────────────────────────────┘     │
│                                                                             │
│  ┌────────────────────────┐  ┌──────────────────────────────────────┐     │
│  │ struct TokenStream     │  │ enum StreamState                     │     │
│  │ • attach()/next()/     │  │ • Idle                               │     │
│  │   reset()              │  │ • Generated { tokens, cursor }       │     │
│  └────────────────────────┘  └──────────────────────────────────────┘     │
└─────────────────────────────────────────────────────────────────────────────┘

┌──────────────────────────────── PHONE LAYER ───────────────────────────────┐
│                                                                             │
│  ┌──────────────────────────┐  ┌────────────────────────────────────┐     │
│  │ trait PhoneNumberParser  │  │ struct PhoneTokenizer              │     │
│  │ • parse() -> ParseResult │  │ • config: PhoneConfig              │     │
│  └──────────────────────────┘  │ • parser: Arc<dyn Parser>          │     │
│                                │ • generate() -> Vec<String>        │     │
│  ┌──────────────────────────┐  └────────────────────────────────────┘     │
│  │ struct ParseResult       │                                              │
│  │ • valid: bool            │  ┌────────────────────────────────────┐     │
│  │ • country_code: Option   │  │ struct PhonenumberParser           │     │
│  │ • national_number: String│  │ • wraps `phonenumber` crate        │     │
│  │ • extension: Option      │  │ • never errors, never panics out   │     │
│  └──────────────────────────┘  └────────────────────────────────────┘     │
└─────────────────────────────────────────────────────────────────────────────┘

┌─────────────────────────────── RELATIONSHIPS ──────────────────────────────┐
│                                                                             │
│  AnalyzerRegistry ──owns──> Analyzer ──owns──> PhoneTokenizer              │
│                                                    │                        │
│                                                    └──uses──> PhoneNumberParser
│                                                                             │
│  TokenStream ──drives──> Tokenizer ──produces──> Token                     │
│                                                                             │
└─────────────────────────────────────────────────────────────────────────────┘
*/
