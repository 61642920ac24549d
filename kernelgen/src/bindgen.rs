use std::collections::HashSet;

use anyhow::Context;
use proc_macro2::{Ident, Literal, Span, TokenStream};
use quote::{format_ident, quote};

use crate::{
    analysis::SourceAnalysis,
    descriptor::{ArgumentDescriptor, KernelDescriptor, Qualifier},
    unit::SourceUnit,
};

/// Names the generated methods use for their own parameters and locals.
const RESERVED_NAMES: &[&str] =
    &["queue", "global", "local", "wait_list", "event", "bound_kernel", "device"];

/// Turns a dialect identifier into a Rust identifier, using a raw
/// identifier for keywords.
pub fn rust_ident(name: &str) -> Ident {
    match name {
        "self" | "Self" | "super" | "crate" | "_" => format_ident!("{}_", name),
        // reserved since edition 2024, still accepted by syn
        "gen" => Ident::new_raw(name, Span::call_site()),
        _ if syn::parse_str::<Ident>(name).is_ok() => format_ident!("{}", name),
        _ => Ident::new_raw(name, Span::call_site()),
    }
}

/// Generated parameter names, one per argument, unique within the kernel.
fn parameter_idents(arguments: &[ArgumentDescriptor]) -> Vec<Ident> {
    let mut used = HashSet::new();
    arguments
        .iter()
        .map(|argument| {
            let mut name = argument.parameter_name();
            if RESERVED_NAMES.contains(&name.as_str()) {
                name.push_str("_arg");
            }
            if !used.insert(name.clone()) {
                name = format!("{name}_{}", argument.index);
                used.insert(name.clone());
            }
            rust_ident(&name)
        })
        .collect()
}

fn host_type(
    kernel: &KernelDescriptor,
    argument: &ArgumentDescriptor,
) -> anyhow::Result<syn::Type> {
    syn::parse_str(&argument.mapped_host_type).with_context(|| {
        format!(
            "cannot parse host type `{}` of argument `{}` in kernel `{}`",
            argument.mapped_host_type, argument.identifier, kernel.name
        )
    })
}

struct Marshalled {
    definition: TokenStream,
    set: TokenStream,
    name: Ident,
}

fn marshal(
    runtime: &syn::Path,
    kernel: &KernelDescriptor,
    argument: &ArgumentDescriptor,
    name: Ident,
) -> anyhow::Result<Marshalled> {
    let ty = host_type(kernel, argument)?;
    let index = Literal::u32_unsuffixed(argument.index);

    let (definition, set) = match argument.qualifier {
        Qualifier::Global => (
            quote! { #name: &#runtime::Buffer<#ty> },
            quote! {
                bound_kernel.set_arg(#index, #runtime::KernelArg::Mem(#name.mem()))?;
            },
        ),
        Qualifier::Local => (
            quote! { #name: usize },
            quote! {
                bound_kernel.set_arg(#index, #runtime::KernelArg::Local {
                    size: #name * ::core::mem::size_of::<#ty>(),
                })?;
            },
        ),
        Qualifier::ByValue => (
            quote! { #name: #ty },
            quote! {
                bound_kernel.set_arg(#index, #runtime::KernelArg::Bytes {
                    size: ::core::mem::size_of::<#ty>(),
                    value: ::core::ptr::addr_of!(#name).cast(),
                })?;
            },
        ),
    };

    Ok(Marshalled {
        definition,
        set,
        name,
    })
}

fn run_methods(
    runtime: &syn::Path,
    dimension: usize,
    definitions: &[TokenStream],
    names: &[Ident],
) -> TokenStream {
    let run = format_ident!("run_{}d", dimension);
    let run_async = format_ident!("run_{}d_async", dimension);
    let size = Literal::usize_unsuffixed(dimension);

    let (global, local): (Vec<TokenStream>, Vec<TokenStream>) = (0..3)
        .map(|axis| {
            if axis < dimension {
                let axis = Literal::usize_unsuffixed(axis);
                (quote! { global[#axis] }, quote! { local[#axis] })
            } else {
                (quote! { 0 }, quote! { 0 })
            }
        })
        .unzip();

    let run_doc = format!(
        " Launches over a {dimension}-dimensional grid and waits for completion. A zero local size lets the runtime choose."
    );
    let run_async_doc = format!(
        " Launches over a {dimension}-dimensional grid and returns the completion event without waiting."
    );

    quote! {
        #[doc = #run_doc]
        pub fn #run(
            &mut self,
            queue: &#runtime::CommandQueue,
            #(#definitions,)*
            global: [usize; #size],
            local: [usize; #size],
            wait_list: &[#runtime::Event],
        ) -> ::core::result::Result<(), #runtime::KernelError> {
            let event = self.dispatch(queue, #(#names,)* [#(#global),*], [#(#local),*], wait_list)?;
            event.wait()
        }

        #[doc = #run_async_doc]
        pub fn #run_async(
            &mut self,
            queue: &#runtime::CommandQueue,
            #(#definitions,)*
            global: [usize; #size],
            local: [usize; #size],
            wait_list: &[#runtime::Event],
        ) -> ::core::result::Result<#runtime::Event, #runtime::KernelError> {
            self.dispatch(queue, #(#names,)* [#(#global),*], [#(#local),*], wait_list)
        }
    }
}

/// Generates the wrapper type for one kernel of `unit`.
pub fn bindgen(
    runtime: &syn::Path,
    unit: &SourceUnit,
    kernel: &KernelDescriptor,
) -> anyhow::Result<TokenStream> {
    let struct_name = rust_ident(&kernel.name);
    let kernel_name = kernel.name.as_str();
    let kernel_path = unit.resolved_path.display().to_string();
    let original_path = unit.path.display().to_string();

    let kernel_source = if unit.embed {
        let text = unit.text.as_str();
        quote! { #runtime::KernelSource::Embedded(#text) }
    } else {
        let relative_path = unit.output_relative_str();
        quote! { #runtime::KernelSource::resolve(#relative_path) }
    };

    let marshalled = kernel
        .arguments
        .iter()
        .zip(parameter_idents(&kernel.arguments))
        .map(|(argument, name)| marshal(runtime, kernel, argument, name))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let definitions =
        marshalled.iter().map(|m| m.definition.clone()).collect::<Vec<_>>();
    let sets = marshalled.iter().map(|m| &m.set);
    let names = marshalled.iter().map(|m| m.name.clone()).collect::<Vec<_>>();

    let bound_kernel = if marshalled.is_empty() {
        quote! { bound_kernel }
    } else {
        quote! { mut bound_kernel }
    };

    let runs = (1..=3)
        .map(|dimension| run_methods(runtime, dimension, &definitions, &names));

    let doc = format!(
        " Wrapper for kernel `{}` declared at {}:{}.",
        kernel.name, original_path, kernel.line
    );

    Ok(quote! {
        #[doc = #doc]
        #[allow(non_camel_case_types)]
        pub struct #struct_name {
            base: #runtime::KernelBase,
        }

        impl #runtime::KernelWrapper for #struct_name {
            const KERNEL_NAME: &'static str = #kernel_name;
            const KERNEL_PATH: &'static str = #kernel_path;
            const ORIGINAL_PATH: &'static str = #original_path;

            fn kernel_source() -> #runtime::KernelSource {
                #kernel_source
            }
        }

        #[allow(clippy::too_many_arguments)]
        impl #struct_name {
            pub fn new(context: &#runtime::Context) -> ::core::result::Result<Self, #runtime::KernelError> {
                ::core::result::Result::Ok(Self {
                    base: #runtime::KernelBase::new::<Self>(context)?,
                })
            }

            pub fn base(&self) -> &#runtime::KernelBase {
                &self.base
            }

            /// Builds the program for `device` and creates the kernel object.
            pub fn build(&mut self, device: #runtime::Device) -> ::core::result::Result<(), #runtime::KernelError> {
                self.base.build(device).map(|_| ())
            }

            fn dispatch(
                &mut self,
                queue: &#runtime::CommandQueue,
                #(#definitions,)*
                global: [usize; 3],
                local: [usize; 3],
                wait_list: &[#runtime::Event],
            ) -> ::core::result::Result<#runtime::Event, #runtime::KernelError> {
                let #bound_kernel = self.base.bind(queue)?;
                #(#sets)*
                bound_kernel.enqueue(queue, global, local, wait_list)
            }

            #(#runs)*
        }
    })
}

/// Generates the artifact for a whole source unit.
pub fn bindgen_unit(
    runtime_path: &str,
    unit: &SourceUnit,
    analysis: &SourceAnalysis,
) -> anyhow::Result<TokenStream> {
    let runtime: syn::Path = syn::parse_str(runtime_path)
        .with_context(|| format!("invalid runtime path `{runtime_path}`"))?;

    let imports = analysis
        .imports
        .iter()
        .map(|import| {
            syn::parse_str::<syn::UseTree>(import).with_context(|| {
                format!(
                    "invalid `using [{import}]` directive in {}",
                    unit.path.display()
                )
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let wrappers = analysis
        .kernels
        .iter()
        .map(|kernel| {
            bindgen(&runtime, unit, kernel).with_context(|| {
                format!("cannot generate bindings for {}", kernel.name)
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(quote! {
        #[allow(unused_imports)]
        use #runtime::types::*;
        #(
            #[allow(unused_imports)]
            use #imports;
        )*

        #(#wrappers)*
    })
}
