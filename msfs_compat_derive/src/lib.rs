extern crate proc_macro;
use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Expr, ExprLit, Fields, Ident, ItemFn, ItemStruct, Lit, Token, Type,
};

/// Declare a standalone module. The simulator calls the exported `module_init`
/// and `module_deinit` functions, and the module receives SimConnect messages
/// for every session it opens.
/// ```rs
/// #[msfs_compat::standalone_module]
/// async fn module(mut module: msfs_compat::StandaloneModule) -> Result<(), Box<dyn std::error::Error>> {
///     let mut sim = module.open_simconnect("module")?;
///     while let Some(recv) = module.next_event().await {
///         // ...
///     }
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn standalone_module(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    expand_standalone_module(args.into(), input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_standalone_module(args: TokenStream2, input: ItemFn) -> syn::Result<TokenStream2> {
    if !args.is_empty() {
        return Err(syn::Error::new_spanned(args, "standalone_module takes no arguments"));
    }
    require_async(&input)?;

    let rusty_name = &input.sig.ident;
    let executor_name = format_ident!("{}_module_executor", rusty_name);
    let handle_name = format_ident!("{}_module_handle", rusty_name);

    Ok(quote! {
        #input

        #[doc(hidden)]
        #[allow(non_snake_case)]
        fn #handle_name(__msfs_compat_module: ::msfs_compat::StandaloneModule) -> ::msfs_compat::gauge::ExecutorFuture {
            ::std::boxed::Box::pin(#rusty_name(__msfs_compat_module))
        }

        #[allow(non_upper_case_globals)]
        static mut #executor_name: ::msfs_compat::gauge::StandaloneModuleExecutor =
            ::msfs_compat::gauge::StandaloneModuleExecutor::new(#handle_name);

        #[no_mangle]
        pub extern "C" fn module_init() {
            unsafe { (*::core::ptr::addr_of!(#executor_name)).handle_init() }
        }

        #[no_mangle]
        pub extern "C" fn module_deinit() {
            unsafe { (*::core::ptr::addr_of!(#executor_name)).handle_deinit() }
        }
    })
}

struct GaugeArgs {
    name: Option<Ident>,
}

impl Parse for GaugeArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.is_empty() {
            return Ok(GaugeArgs { name: None });
        }
        let key: Ident = input.parse()?;
        if key != "name" {
            return Err(syn::Error::new(key.span(), "expected `name = IDENT`"));
        }
        input.parse::<Token![=]>()?;
        let name = input.parse()?;
        if !input.is_empty() {
            return Err(input.error("unexpected tokens after gauge name"));
        }
        Ok(GaugeArgs { name: Some(name) })
    }
}

/// Declare a gauge callback. It will be automatically exported with the name
/// `NAME_gauge_callback`, where `NAME` is the name of the decorated function.
/// ```rs
/// // Declare and export `FOO_gauge_callback` and `FOO_mouse_callback`
/// #[msfs_compat::gauge]
/// async fn FOO(mut gauge: msfs_compat::Gauge) -> Result<(), Box<dyn std::error::Error>> {
///     while let Some(event) = gauge.next_event().await {
///         // ...
///     }
///     Ok(())
/// }
/// ```
///
/// The macro can also be given a parameter, `name`, to rename the exported function.
/// ```rs
/// // Declare and export `FOO_gauge_callback`
/// #[msfs_compat::gauge(name = FOO)]
/// async fn xyz(...) {}
/// ```
#[proc_macro_attribute]
pub fn gauge(args: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(args as GaugeArgs);
    let input = parse_macro_input!(item as ItemFn);
    expand_gauge(args, input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_gauge(args: GaugeArgs, input: ItemFn) -> syn::Result<TokenStream2> {
    require_async(&input)?;

    let rusty_name = &input.sig.ident;
    let executor_name = format_ident!("{}_gauge_executor", rusty_name);
    let handle_name = format_ident!("{}_gauge_handle", rusty_name);

    let extern_name = args.name.unwrap_or_else(|| rusty_name.clone());
    let extern_gauge_name = format_ident!("{}_gauge_callback", extern_name);
    let extern_mouse_name = format_ident!("{}_mouse_callback", extern_name);

    Ok(quote! {
        #input

        #[doc(hidden)]
        #[allow(non_snake_case)]
        fn #handle_name(__msfs_compat_gauge: ::msfs_compat::Gauge) -> ::msfs_compat::gauge::ExecutorFuture {
            ::std::boxed::Box::pin(#rusty_name(__msfs_compat_gauge))
        }

        #[allow(non_upper_case_globals)]
        static mut #executor_name: ::msfs_compat::gauge::GaugeExecutor =
            ::msfs_compat::gauge::GaugeExecutor::new(#handle_name);

        #[no_mangle]
        #[allow(non_snake_case)]
        pub extern "C" fn #extern_gauge_name(
            ctx: ::msfs_compat::sys::FsContext,
            service_id: ::std::ffi::c_int,
            p_data: *mut ::std::ffi::c_void,
        ) -> bool {
            unsafe { (*::core::ptr::addr_of!(#executor_name)).handle_gauge(ctx, service_id, p_data) }
        }

        #[no_mangle]
        #[allow(non_snake_case)]
        pub extern "C" fn #extern_mouse_name(
            fx: ::std::ffi::c_float,
            fy: ::std::ffi::c_float,
            i_flags: ::std::ffi::c_uint,
        ) {
            unsafe { (*::core::ptr::addr_of!(#executor_name)).handle_mouse(fx, fy, i_flags) }
        }
    })
}

fn require_async(input: &ItemFn) -> syn::Result<()> {
    if input.sig.asyncness.is_none() {
        return Err(syn::Error::new_spanned(
            input.sig.fn_token,
            "expected an `async fn`",
        ));
    }
    Ok(())
}

/// Generate a struct which can be used with SimConnect's data definitions.
/// ```rs
/// #[sim_connect::data_definition]
/// struct ControlSurfaces {
///     #[name = "ELEVATOR POSITION"]
///     #[unit = "Position"]
///     elevator: f64,
///     #[name = "AILERON POSITION"]
///     #[unit = "Position"]
///     #[epsilon = 0.01]
///     ailerons: f64,
/// }
///
/// sim.request_data_on_sim_object::<ControlSurfaces>(0, SIMCONNECT_OBJECT_ID_USER, Period::SimFrame)?;
/// ```
///
/// Fields are sent back to back, so the struct must not contain padding.
///
/// `#[unit]` may be left out for the common simulation variables listed in
/// `DEFAULT_UNITS`; every other variable needs one.
#[proc_macro_attribute]
pub fn sim_connect_data_definition(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    expand_data_definition(args.into(), input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Units used when a field has no `#[unit]`.
const DEFAULT_UNITS: &[(&str, &str)] = &[
    ("AILERON POSITION", "position"),
    ("AIRSPEED INDICATED", "knots"),
    ("AIRSPEED TRUE", "knots"),
    ("ATC ID", ""),
    ("ELEVATOR POSITION", "position"),
    ("ELEVATOR TRIM POSITION", "radians"),
    ("FUEL TOTAL QUANTITY", "gallons"),
    ("GENERAL ENG THROTTLE LEVER POSITION", "percent"),
    ("GROUND VELOCITY", "knots"),
    ("INDICATED ALTITUDE", "feet"),
    ("PLANE ALT ABOVE GROUND", "feet"),
    ("PLANE ALTITUDE", "feet"),
    ("PLANE BANK DEGREES", "radians"),
    ("PLANE HEADING DEGREES MAGNETIC", "radians"),
    ("PLANE HEADING DEGREES TRUE", "radians"),
    ("PLANE LATITUDE", "radians"),
    ("PLANE LONGITUDE", "radians"),
    ("PLANE PITCH DEGREES", "radians"),
    ("RADIO HEIGHT", "feet"),
    ("RUDDER POSITION", "position"),
    ("SIM ON GROUND", "bool"),
    ("TITLE", ""),
    ("VERTICAL SPEED", "feet per second"),
];

/// Looks up `name` in `DEFAULT_UNITS`, ignoring case and any `:index` suffix.
fn default_unit(name: &str) -> Option<&'static str> {
    let base = name.split(':').next().unwrap_or(name).trim();
    DEFAULT_UNITS
        .iter()
        .find(|(var, _)| var.eq_ignore_ascii_case(base))
        .map(|(_, unit)| *unit)
}

struct Datum {
    name: String,
    unit: String,
    epsilon: f32,
    datatype: Ident,
}

fn expand_data_definition(args: TokenStream2, mut input: ItemStruct) -> syn::Result<TokenStream2> {
    if !args.is_empty() {
        return Err(syn::Error::new_spanned(args, "data_definition takes no arguments"));
    }
    let name = input.ident.clone();

    let mut data = Vec::new();
    let mut types = Vec::new();
    for field in named_fields(&mut input)? {
        let datatype = datatype_of(&field.ty)?;
        let mut datum_name = None;
        let mut unit = None;
        let mut epsilon = 0.0;
        let mut rest = Vec::new();
        for attr in field.attrs.drain(..) {
            if attr.path().is_ident("name") {
                datum_name = Some(string_value(&attr)?);
            } else if attr.path().is_ident("unit") {
                unit = Some(string_value(&attr)?);
            } else if attr.path().is_ident("epsilon") {
                epsilon = float_value(&attr)?;
            } else {
                rest.push(attr);
            }
        }
        field.attrs = rest;

        let field_span = field.ident.as_ref().map_or_else(Span::call_site, Ident::span);
        let datum_name =
            datum_name.ok_or_else(|| syn::Error::new(field_span, "missing #[name = \"...\"]"))?;
        let unit = match unit {
            Some(unit) => unit,
            None => default_unit(&datum_name)
                .ok_or_else(|| {
                    syn::Error::new(
                        field_span,
                        format!("{} needs a #[unit = \"...\"] attribute", datum_name),
                    )
                })?
                .to_string(),
        };
        data.push(Datum {
            name: datum_name,
            unit,
            epsilon,
            datatype,
        });
        types.push(field.ty.clone());
    }

    let definitions = data.iter().map(|datum| {
        let Datum {
            name,
            unit,
            epsilon,
            datatype,
        } = datum;
        quote! { (#name, #unit, #epsilon, ::msfs_compat::sys::#datatype) }
    });

    Ok(quote! {
        #[repr(C)]
        #input

        impl ::msfs_compat::sim_connect::DataDefinition for #name {
            const DEFINITIONS: &'static [(&'static str, &'static str, f32, ::msfs_compat::sys::SIMCONNECT_DATATYPE)] = &[
                #(#definitions),*
            ];
        }

        const _: () = assert!(
            ::core::mem::size_of::<#name>() == 0 #(+ ::core::mem::size_of::<#types>())*,
            "data definition fields must not be padded"
        );
    })
}

/// Generate a struct which can be used with SimConnect's client data definitions.
/// ```rs
/// #[sim_connect::client_data_definition]
/// struct Lights {
///     #[epsilon = 0.5]
///     brightness: f64,
///     on: u8,
/// }
/// ```
#[proc_macro_attribute]
pub fn sim_connect_client_data_definition(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    expand_client_data_definition(args.into(), input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_client_data_definition(
    args: TokenStream2,
    mut input: ItemStruct,
) -> syn::Result<TokenStream2> {
    if !args.is_empty() {
        return Err(syn::Error::new_spanned(
            args,
            "client_data_definition takes no arguments",
        ));
    }
    let name = input.ident.clone();

    let mut definitions = Vec::new();
    for field in named_fields(&mut input)? {
        let mut epsilon = 0.0f32;
        let mut rest = Vec::new();
        for attr in field.attrs.drain(..) {
            if attr.path().is_ident("epsilon") {
                epsilon = float_value(&attr)?;
            } else {
                rest.push(attr);
            }
        }
        field.attrs = rest;

        let ident = &field.ident;
        let ty = &field.ty;
        definitions.push(quote! {
            (
                ::core::mem::offset_of!(#name, #ident),
                ::core::mem::size_of::<#ty>(),
                #epsilon,
            )
        });
    }

    Ok(quote! {
        #[repr(C)]
        #input

        impl ::msfs_compat::sim_connect::ClientDataDefinition for #name {
            fn get_definitions() -> ::std::vec::Vec<(usize, usize, f32)> {
                ::std::vec![#(#definitions),*]
            }
        }
    })
}

fn named_fields(input: &mut ItemStruct) -> syn::Result<impl Iterator<Item = &mut syn::Field>> {
    match &mut input.fields {
        Fields::Named(fields) => Ok(fields.named.iter_mut()),
        _ => Err(syn::Error::new_spanned(
            &input.ident,
            "expected a struct with named fields",
        )),
    }
}

fn datatype_of(ty: &Type) -> syn::Result<Ident> {
    let unsupported = || {
        syn::Error::new_spanned(
            ty,
            "unsupported type, expected i32, i64, f32, f64, DataXYZ, DataLatLonAlt or [u8; N]",
        )
    };
    let datatype = match ty {
        Type::Path(p) => {
            let ident = p.path.segments.last().ok_or_else(unsupported)?.ident.to_string();
            match ident.as_str() {
                "i32" | "u32" => "INT32",
                "i64" | "u64" => "INT64",
                "f32" => "FLOAT32",
                "f64" => "FLOAT64",
                "DataXYZ" => "XYZ",
                "DataLatLonAlt" => "LATLONALT",
                "bool" => {
                    return Err(syn::Error::new_spanned(
                        ty,
                        "bool cannot hold a SimConnect INT32, use i32",
                    ))
                }
                _ => return Err(unsupported()),
            }
        }
        Type::Array(array) => {
            let len = match &array.len {
                Expr::Lit(ExprLit {
                    lit: Lit::Int(len), ..
                }) => len.base10_parse::<usize>()?,
                _ => return Err(unsupported()),
            };
            match len {
                8 => "STRING8",
                32 => "STRING32",
                64 => "STRING64",
                128 => "STRING128",
                256 => "STRING256",
                260 => "STRING260",
                _ => {
                    return Err(syn::Error::new_spanned(
                        &array.len,
                        "string fields must be 8, 32, 64, 128, 256 or 260 bytes",
                    ))
                }
            }
        }
        _ => return Err(unsupported()),
    };
    Ok(format_ident!("SIMCONNECT_DATATYPE_{}", datatype))
}

fn string_value(attr: &syn::Attribute) -> syn::Result<String> {
    match &attr.meta.require_name_value()?.value {
        Expr::Lit(ExprLit {
            lit: Lit::Str(s), ..
        }) => Ok(s.value()),
        value => Err(syn::Error::new_spanned(value, "expected a string")),
    }
}

fn float_value(attr: &syn::Attribute) -> syn::Result<f32> {
    match &attr.meta.require_name_value()?.value {
        Expr::Lit(ExprLit {
            lit: Lit::Float(f), ..
        }) => f.base10_parse(),
        Expr::Lit(ExprLit {
            lit: Lit::Int(i), ..
        }) => i.base10_parse(),
        value => Err(syn::Error::new_spanned(value, "expected a number")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn gauge_exports_callbacks() {
        let input: ItemFn = parse_quote! {
            async fn demo(gauge: Gauge) -> Result<(), Box<dyn std::error::Error>> { Ok(()) }
        };
        let output = expand_gauge(GaugeArgs { name: None }, input).unwrap().to_string();
        assert!(output.contains("demo_gauge_callback"));
        assert!(output.contains("demo_mouse_callback"));

        let input: ItemFn = parse_quote! {
            async fn demo(gauge: Gauge) -> Result<(), Box<dyn std::error::Error>> { Ok(()) }
        };
        let args: GaugeArgs = syn::parse_str("name = PFD").unwrap();
        let output = expand_gauge(args, input).unwrap().to_string();
        assert!(output.contains("PFD_gauge_callback"));
        assert!(!output.contains("demo_gauge_callback"));
    }

    #[test]
    fn gauge_rejects_bad_input() {
        assert!(syn::parse_str::<GaugeArgs>("label = PFD").is_err());
        assert!(syn::parse_str::<GaugeArgs>("name = PFD, extra").is_err());
        let input: ItemFn = parse_quote! { fn demo(gauge: Gauge) {} };
        let err = expand_gauge(GaugeArgs { name: None }, input).unwrap_err();
        assert_eq!(err.to_string(), "expected an `async fn`");
    }

    #[test]
    fn standalone_module_exports_init() {
        let input: ItemFn = parse_quote! {
            async fn module(module: StandaloneModule) -> Result<(), Box<dyn std::error::Error>> { Ok(()) }
        };
        let output = expand_standalone_module(TokenStream2::new(), input)
            .unwrap()
            .to_string();
        assert!(output.contains("module_init"));
        assert!(output.contains("module_deinit"));
        // The handle must still call the user's `module` fn.
        assert!(output.contains("Box :: pin (module (__msfs_compat_module))"));
    }

    #[test]
    fn gauge_handle_does_not_shadow_the_gauge_fn() {
        let input: ItemFn = parse_quote! {
            async fn gauge(gauge: Gauge) -> Result<(), Box<dyn std::error::Error>> { Ok(()) }
        };
        let output = expand_gauge(GaugeArgs { name: None }, input).unwrap().to_string();
        assert!(output.contains("Box :: pin (gauge (__msfs_compat_gauge))"));
        assert!(output.contains("gauge_gauge_callback"));
    }

    #[test]
    fn data_definition_lists_fields() {
        let input: ItemStruct = parse_quote! {
            struct Data {
                #[name = "PLANE ALTITUDE"]
                #[unit = "feet"]
                #[epsilon = 0.5]
                altitude: f64,
                #[name = "ATC ID"]
                #[unit = ""]
                atc_id: [u8; 32],
            }
        };
        let output = expand_data_definition(TokenStream2::new(), input)
            .unwrap()
            .to_string();
        assert!(output.contains("\"PLANE ALTITUDE\""));
        assert!(output.contains("0.5f32"));
        assert!(output.contains("SIMCONNECT_DATATYPE_FLOAT64"));
        assert!(output.contains("SIMCONNECT_DATATYPE_STRING32"));
        assert!(!output.contains("# [name"));
    }

    #[test]
    fn data_definition_rejects_bool_and_missing_units() {
        let input: ItemStruct = parse_quote! {
            struct Data {
                #[name = "SIM ON GROUND"]
                #[unit = "bool"]
                on_ground: bool,
            }
        };
        let err = expand_data_definition(TokenStream2::new(), input).unwrap_err();
        assert!(err.to_string().starts_with("bool cannot"));

        let input: ItemStruct = parse_quote! {
            struct Data {
                #[name = "AMBIENT WIND VELOCITY"]
                wind: f64,
            }
        };
        let err = expand_data_definition(TokenStream2::new(), input).unwrap_err();
        assert_eq!(
            err.to_string(),
            "AMBIENT WIND VELOCITY needs a #[unit = \"...\"] attribute"
        );
    }

    #[test]
    fn common_variables_have_default_units() {
        assert_eq!(default_unit("PLANE ALTITUDE"), Some("feet"));
        assert_eq!(default_unit("plane latitude"), Some("radians"));
        assert_eq!(default_unit("GENERAL ENG THROTTLE LEVER POSITION:1"), Some("percent"));
        assert_eq!(default_unit("TITLE"), Some(""));
        assert_eq!(default_unit("AMBIENT WIND VELOCITY"), None);

        let input: ItemStruct = parse_quote! {
            struct Data {
                #[name = "PLANE ALTITUDE"]
                altitude: f64,
                #[name = "AIRSPEED INDICATED"]
                #[unit = "meters per second"]
                airspeed: f64,
            }
        };
        let output = expand_data_definition(TokenStream2::new(), input)
            .unwrap()
            .to_string();
        assert!(output.contains("(\"PLANE ALTITUDE\" , \"feet\""));
        assert!(output.contains("\"meters per second\""));
        assert!(!output.contains("\"knots\""));
    }

    #[test]
    fn client_data_definition_uses_offsets() {
        let input: ItemStruct = parse_quote! {
            struct Lights {
                #[epsilon = 0.25]
                brightness: f64,
                on: u8,
            }
        };
        let output = expand_client_data_definition(TokenStream2::new(), input)
            .unwrap()
            .to_string();
        assert!(output.contains("offset_of ! (Lights , brightness)"));
        assert!(output.contains("offset_of ! (Lights , on)"));
        assert!(output.contains("0.25f32"));
    }
}
